use crate::db::preferences::Theme;
use crate::domain::reminders::{ReminderFilter, ReminderInbox, ReminderKind};
use crate::format::{days_left_text, short_date};
use crate::templates::{desktop_layout, empty_state};
use maud::{html, Markup};

pub fn reminders_page(inbox: &ReminderInbox, active: ReminderFilter, theme: Theme) -> Markup {
    let shown = inbox.filtered(active);

    desktop_layout(
        "Reminders",
        theme,
        html! {
            main class="container" {
                h1 { "Reminders" }

                nav class="tabs" {
                    @for (filter, count) in inbox.counts() {
                        span class=(if filter == active { "tab active" } else { "tab" }) {
                            (filter.label()) " (" (count) ")"
                        }
                    }
                }

                @if shown.is_empty() {
                    @if active == ReminderFilter::All {
                        (empty_state("No reminders", "You're all caught up."))
                    } @else {
                        (empty_state("No reminders", &format!("No {} reminders at the moment.", active.label().to_lowercase())))
                    }
                } @else {
                    ul class="reminders" {
                        @for r in shown {
                            li class=(format!("reminder priority-{}", r.priority.label())) data-id=(r.id) {
                                h3 {
                                    (r.product_name)
                                    @if !r.is_read {
                                        span class="badge badge-new" { "NEW" }
                                    }
                                }
                                p class="kind" {
                                    @match r.kind {
                                        ReminderKind::Expiry => "Expiry",
                                        ReminderKind::Maintenance => "Maintenance",
                                        ReminderKind::Renewal => "Renewal",
                                    }
                                }
                                p { (r.message) }
                                p class="meta" {
                                    span { (short_date(r.date)) }
                                    " · "
                                    span { (days_left_text(r.days_left)) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
