use crate::model::document::Document;
use crate::model::link::Link;
use crate::model::pagination::{EnvelopeStyle, PaginatedDocument, PaginationLinks};
use crate::query::{remove_query_param, replace_query_param};
use crate::Result;

/// Page numbers start at 1
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq)]
pub struct PageNumber {
    pub number: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RelativePages {
    pub first: usize,
    pub last: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageNumber {
    pub fn new(number: usize, total_pages: usize) -> Self { Self { number, total_pages } }

    pub fn has_prev(&self) -> bool { self.number > 1 }

    pub fn has_next(&self) -> bool { self.number < self.total_pages }

    /// An empty result set still has one (empty) page
    pub fn relative_pages(&self) -> RelativePages {
        RelativePages {
            first: 1,
            last: self.total_pages.max(1),
            prev: if self.has_prev() { Some(self.number - 1) } else { None },
            next: if self.has_next() { Some(self.number + 1) } else { None },
        }
    }
}

/// What the host paginator knows about the current request
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub page: PageNumber,
    pub request_url: String,
}

impl PageState {
    pub fn new(page: PageNumber, request_url: impl ToString) -> Self {
        Self { page, request_url: request_url.to_string() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Paginator {
    pub page_query_param: String,
    pub style: EnvelopeStyle,
}

impl Default for Paginator {
    fn default() -> Self { Self { page_query_param: "page".into(), style: Default::default() } }
}

impl Paginator {
    pub fn new(page_query_param: impl ToString, style: EnvelopeStyle) -> Self {
        Self { page_query_param: page_query_param.to_string(), style }
    }

    pub fn links(&self, state: &PageState) -> Result<PaginationLinks> {
        let pages = state.page.relative_pages();
        let link = |number: usize| -> Result<Link> {
            let url = replace_query_param(&state.request_url, &self.page_query_param, number)?;
            Ok(url.parse::<Link>()?)
        };

        // The first page is the bare url when stepping back
        let prev = |number: usize| -> Result<Link> {
            if number == 1 {
                Ok(remove_query_param(&state.request_url, &self.page_query_param)?.parse::<Link>()?)
            } else {
                link(number)
            }
        };

        Ok(PaginationLinks {
            first: link(pages.first)?,
            last: link(pages.last)?,
            prev: pages.prev.map(prev).transpose()?,
            next: pages.next.map(&link).transpose()?,
        })
    }

    /// Wraps a rendered page, `document` itself is left as is
    pub fn wrap(&self, document: Document, state: &PageState) -> Result<PaginatedDocument> {
        let links = self.links(state)?;
        debug!(
            "Paginating page {} of {} from `{}`",
            state.page.number, state.page.total_pages, state.request_url
        );
        Ok(PaginatedDocument { document, links, style: self.style })
    }
}
