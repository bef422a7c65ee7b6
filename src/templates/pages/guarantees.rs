use crate::db::preferences::Theme;
use crate::domain::filter::Selection;
use crate::domain::guarantee::{Category, GuaranteeRecord, Status};
use crate::domain::logic::days_until_expiry;
use crate::domain::view::{Page, ViewMode, ViewState};
use crate::format::{days_left_text, format_money, long_date, relative_day, short_date};
use crate::templates::{desktop_layout, empty_state, status_badge};
use chrono::NaiveDateTime;
use maud::{html, Markup};

pub struct GuaranteesVm<'a> {
    pub state: &'a ViewState,
    pub page: Page<'a>,
    /// Size of the unfiltered collection, for "N of M guarantees".
    pub total_records: usize,
    /// Categories offered in the dropdown after "All".
    pub categories: Vec<Category>,
    /// Newest first; offered as suggestions under the search box.
    pub recent_searches: Vec<String>,
    pub now: NaiveDateTime,
    pub theme: Theme,
}

fn selection_label<T: Copy>(sel: &Selection<T>, label: impl Fn(T) -> &'static str) -> &'static str {
    match sel {
        Selection::All => "All",
        Selection::Only(v) => label(*v),
    }
}

pub fn guarantees_page(vm: &GuaranteesVm) -> Markup {
    let filter = &vm.state.filter;
    let selected_category = selection_label(&filter.category, |c: Category| c.label());
    let selected_status = selection_label(&filter.status, |s: Status| s.label());

    desktop_layout(
        "My Guarantees",
        vm.theme,
        html! {
            main class="container" {
                h1 { "My Guarantees" }
                p { "Manage and track all your warranty documents" }

                form class="filters" method="get" {
                    input type="text" name="search" list="recent-searches" placeholder="Search guarantees..." value=(filter.search);
                    datalist id="recent-searches" {
                        @for q in &vm.recent_searches {
                            option value=(q);
                        }
                    }
                    select name="category" {
                        option value="All" selected[selected_category == "All"] { "All" }
                        @for c in &vm.categories {
                            option value=(c.label()) selected[selected_category == c.label()] { (c.label()) }
                        }
                    }
                    select name="status" {
                        option value="All" selected[selected_status == "All"] { "All" }
                        @for s in Status::ALL {
                            option value=(s.label()) selected[selected_status == s.label()] { (s.label()) }
                        }
                    }
                }

                p class="result-count" {
                    (vm.page.total_count) " of " (vm.total_records) " guarantees"
                }

                @if vm.page.items.is_empty() {
                    (empty_state("No guarantees found", "Try adjusting your search or filters"))
                } @else {
                    @match vm.state.mode {
                        ViewMode::List => (list_view(&vm.page.items, vm.now)),
                        ViewMode::Grid => (grid_view(&vm.page.items, vm.now)),
                    }
                }

                @if vm.page.total_pages > 1 {
                    nav class="pagination" {
                        "Page " (vm.page.current_page) " of " (vm.page.total_pages)
                    }
                }
            }
        },
    )
}

fn list_view(items: &[&GuaranteeRecord], now: NaiveDateTime) -> Markup {
    html! {
        table class="guarantee-list" {
            thead {
                tr {
                    th { "Product" }
                    th { "Category" }
                    th { "Purchase Date" }
                    th { "Expiry" }
                    th { "Status" }
                }
            }
            tbody {
                @for g in items {
                    tr data-id=(g.id) {
                        td {
                            div class="product" { (g.product_name) }
                            div class="brand" { (g.brand) }
                        }
                        td { (g.category.label()) }
                        td { (g.purchase_date) }
                        td title=(long_date(g.expiry_date)) {
                            div { (g.expiry_date) }
                            @if g.status != Status::Expired {
                                div class="days-left" { (days_left_text(days_until_expiry(g.expiry_date, now))) }
                            }
                        }
                        td { (status_badge(g.status)) }
                    }
                }
            }
        }
    }
}

fn grid_view(items: &[&GuaranteeRecord], now: NaiveDateTime) -> Markup {
    html! {
        div class="guarantee-grid" {
            @for g in items {
                div class="guarantee-card" data-id=(g.id) {
                    div class="card-head" {
                        h3 { (g.product_name) }
                        p { (g.brand) }
                        (status_badge(g.status))
                    }
                    dl {
                        dt { "Category:" } dd { (g.category.label()) }
                        dt { "Purchase:" } dd { (short_date(g.purchase_date)) }
                        dt { "Expires:" } dd { (short_date(g.expiry_date)) " (" (relative_day(g.expiry_date, now)) ")" }
                        dt { "Amount:" } dd { (format_money(&g.purchase_amount)) }
                    }
                    p class="documents" { (g.documents.len()) " documents" }
                }
            }
        }
    }
}
