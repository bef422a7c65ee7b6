use crate::domain::guarantee::Status;
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_badge(status: Status) -> Markup {
    let tone = match status {
        Status::Active => "badge-active",
        Status::ExpiringSoon => "badge-expiring",
        Status::Expired => "badge-expired",
    };

    html! {
        span class=(format!("badge {tone}")) { (status.label()) }
    }
}

pub fn stat_card(label: &str, value: &str) -> Markup {
    html! {
        div class="stat-card" {
            p class="stat-label" { (label) }
            p class="stat-value" { (value) }
        }
    }
}

pub fn empty_state(title: &str, hint: &str) -> Markup {
    html! {
        div class="empty-state" {
            h3 { (title) }
            p { (hint) }
        }
    }
}
