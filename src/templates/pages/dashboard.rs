use crate::db::preferences::Theme;
use crate::domain::guarantee::GuaranteeRecord;
use crate::domain::logic::days_until_expiry;
use crate::domain::sort::{SortCriteria, SortDirection, SortKey};
use crate::domain::stats::DashboardStats;
use crate::format::{days_left_text, format_money, short_date, with_commas};
use crate::templates::components::stat_card;
use crate::templates::{card, desktop_layout, empty_state, status_badge};
use chrono::NaiveDateTime;
use maud::{html, Markup};

/// Rows shown in the "recent guarantees" table.
pub const DASHBOARD_ROWS: usize = 5;

pub struct DashboardVm<'a> {
    pub stats: DashboardStats,
    /// Already sorted; only the first `DASHBOARD_ROWS` are rendered.
    pub rows: Vec<&'a GuaranteeRecord>,
    pub sort: SortCriteria,
    pub now: NaiveDateTime,
    pub soon_days: i64,
    pub theme: Theme,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        vm.theme,
        html! {
            main class="container" {
                h1 { "Dashboard" }

                section class="stats" {
                    (stat_card("Total Guarantees", &vm.stats.total.to_string()))
                    (stat_card("Expiring Soon", &vm.stats.expiring_soon.to_string()))
                    (stat_card("Active Warranties", &vm.stats.active.to_string()))
                    (stat_card("Total Value", &format!("₹{}", with_commas(vm.stats.total_value))))
                }

                (recent_table(vm))

                (card("By Category", html! {
                    ul {
                        @for c in &vm.stats.categories {
                            li {
                                (c.category.label()) ": " strong { (c.count) }
                                " (" (c.percentage) "%, ₹" (with_commas(c.total_value)) ")"
                            }
                        }
                    }
                }))
            }
        },
    )
}

fn sort_header(label: &str, key: SortKey, current: &SortCriteria) -> Markup {
    let arrow = if current.key != key {
        ""
    } else if current.direction == SortDirection::Asc {
        " ▲"
    } else {
        " ▼"
    };
    let next = current.select(key);

    html! {
        th data-sort=(key.as_str()) data-next-direction=(next.direction.as_str()) {
            (label) (arrow)
        }
    }
}

fn recent_table(vm: &DashboardVm) -> Markup {
    html! {
        section class="card" id="recent-guarantees" {
            h3 { "Recent Guarantees" }
            @if vm.rows.is_empty() {
                (empty_state("No guarantees yet", "Upload your first warranty document to get started."))
            } @else {
                table {
                    thead {
                        tr {
                            (sort_header("Product", SortKey::Name, &vm.sort))
                            (sort_header("Expiry Date", SortKey::Expiry, &vm.sort))
                            (sort_header("Value", SortKey::Value, &vm.sort))
                            (sort_header("Status", SortKey::Status, &vm.sort))
                        }
                    }
                    tbody {
                        @for g in vm.rows.iter().take(DASHBOARD_ROWS) {
                            @let days_left = days_until_expiry(g.expiry_date, vm.now);
                            tr {
                                td {
                                    div class="product" { (g.product_name) }
                                    div class="brand" { (g.brand) " · " (g.category.label()) }
                                }
                                td {
                                    (short_date(g.expiry_date))
                                    @if (0..=vm.soon_days).contains(&days_left) {
                                        div class="days-left" { (days_left_text(days_left)) }
                                    }
                                }
                                td { (format_money(&g.purchase_amount)) }
                                td { (status_badge(g.status)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
