use crate::store::NoticeLevel;
use maud::{html, Markup};

pub fn notice(level: NoticeLevel, message: &str) -> Markup {
    let class = match level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Error => "notice notice-error",
    };

    html! {
        div class=(class) role="status" { (message) }
    }
}

pub fn warning(message: &str) -> Markup {
    html! {
        div class="notice notice-warning" role="status" { (message) }
    }
}
