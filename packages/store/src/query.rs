//! # Dashboard list query
//!
//! Pure functions from a ticket collection plus the user's search, sort and
//! page choices to what the dashboard shows. Nothing here is cached; the view
//! calls [`DashboardQuery::view`] on every change and gets the same answer for
//! the same inputs.
//!
//! The pipeline is [`filter_tickets`] → [`sort_tickets`] → [`partition_by_status`]
//! → [`paginate`] per bucket.

use std::cmp::Ordering;

use crate::models::{Ticket, TicketStatus};

/// Columns the dashboard can sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Title,
    Customer,
    Email,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Customer => "Customer",
            SortKey::Email => "Email",
            SortKey::Priority => "Priority",
            SortKey::Status => "Status",
            SortKey::CreatedAt => "Created",
            SortKey::UpdatedAt => "Updated",
        }
    }

    fn compare(&self, a: &Ticket, b: &Ticket) -> Ordering {
        match self {
            SortKey::Title => fold_case_cmp(&a.title, &b.title),
            SortKey::Customer => fold_case_cmp(&a.customer, &b.customer),
            SortKey::Email => fold_case_cmp(&a.email, &b.email),
            // Severity order (low < medium < high), not the alphabetical
            // order of the labels (high < low < medium).
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::Status => a.status.index().cmp(&b.status.index()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// The sort after clicking `key`: the same column flips direction,
    /// a different column starts ascending.
    pub fn toggled(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        let direction = match current {
            Some(c) if c.key == key && c.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        SortConfig { key, direction }
    }
}

/// Case-folded code point order, with ties broken on the raw text so the
/// order stays total.
///
/// This approximates a locale collator: accented letters sort after `z`, and
/// `"A"` comes before `"a"` where a locale collator would put it after.
fn fold_case_cmp(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| -> String { s.chars().flat_map(char::to_lowercase).collect() };
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Tickets with any field containing `term` as typed (surrounding whitespace
/// included), case-insensitively, in input order.
pub fn filter_tickets<'a>(tickets: &'a [Ticket], term: &str) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| t.matches(term)).collect()
}

/// Stable sort; `None` keeps the current order.
pub fn sort_tickets(tickets: &mut [&Ticket], sort: Option<SortConfig>) {
    let Some(sort) = sort else {
        return;
    };
    tickets.sort_by(|a, b| match sort.direction {
        SortDirection::Ascending => sort.key.compare(a, b),
        SortDirection::Descending => sort.key.compare(b, a),
    });
}

/// Split into the three status buckets, preserving order within each.
pub fn partition_by_status<'a>(tickets: &[&'a Ticket]) -> [Vec<&'a Ticket>; 3] {
    let mut buckets: [Vec<&Ticket>; 3] = Default::default();
    for &ticket in tickets {
        buckets[ticket.status.index()].push(ticket);
    }
    buckets
}

/// One page of a bucket. `number` is 1-based.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    /// The size actually used for slicing, at least 1.
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    /// 1-based index of the first item shown, 0 when empty.
    pub fn first_item(&self) -> usize {
        if self.total_items == 0 {
            0
        } else {
            (self.number - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item shown.
    pub fn last_item(&self) -> usize {
        ((self.number - 1) * self.page_size + self.items.len()).min(self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// Slice out page `number` (1-based), clamped to the valid range.
pub fn paginate<T: Clone>(items: &[T], number: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = items.len().div_ceil(page_size).max(1);
    let number = number.clamp(1, total_pages);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        number,
        page_size,
        total_pages,
        total_items: items.len(),
    }
}

/// One status tab of the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct BucketView {
    pub status: TicketStatus,
    pub page: Page<Ticket>,
}

impl BucketView {
    pub fn is_empty(&self) -> bool {
        self.page.total_items == 0
    }
}

/// The user's current search, sort and per-bucket page.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardQuery {
    search: String,
    sort: Option<SortConfig>,
    pages: [usize; 3],
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            pages: [1; 3],
        }
    }
}

impl DashboardQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortConfig> {
        self.sort
    }

    pub fn page(&self, status: TicketStatus) -> usize {
        self.pages[status.index()]
    }

    /// Change the search term. Every bucket goes back to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.pages = [1; 3];
    }

    /// Sort by `key`, toggling direction on repeat clicks. Every bucket goes back to page 1.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = Some(SortConfig::toggled(self.sort, key));
        self.pages = [1; 3];
    }

    pub fn next_page(&mut self, status: TicketStatus, total_pages: usize) {
        let page = &mut self.pages[status.index()];
        *page = (*page + 1).min(total_pages.max(1));
    }

    pub fn previous_page(&mut self, status: TicketStatus) {
        let page = &mut self.pages[status.index()];
        *page = page.saturating_sub(1).max(1);
    }

    /// Run the whole pipeline over `tickets`.
    pub fn view(&self, tickets: &[Ticket], page_size: usize) -> [BucketView; 3] {
        let mut matching = filter_tickets(tickets, &self.search);
        sort_tickets(&mut matching, self.sort);
        let buckets = partition_by_status(&matching);
        TicketStatus::ALL.map(|status| {
            let bucket: Vec<Ticket> = buckets[status.index()].iter().map(|t| (*t).clone()).collect();
            BucketView {
                status,
                page: paginate(&bucket, self.page(status), page_size),
            }
        })
    }
}
