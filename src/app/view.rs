use std::collections::BTreeMap;
use std::fmt::Write;

use crate::error::Result;
use crate::router::{Props, RouteMatch, RouteTable, ViewKind};
use crate::state::Record;

use super::AppContext;

/// A view draws itself from shared state and the props its route bound.
pub trait View {
    fn render(&self, ctx: &AppContext, props: &Props) -> String;
}

/// The view that handles `kind`.
pub fn view_for(kind: ViewKind) -> &'static dyn View {
    match kind {
        ViewKind::Overview => &OverviewView,
        ViewKind::Detail => &DetailView,
    }
}

/// Every genre in the dataset, with a record count for each.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverviewView;

impl OverviewView {
    /// Record counts per genre, in genre order.
    pub fn genres(ctx: &AppContext) -> BTreeMap<String, usize> {
        let field = ctx.config().genre_field.as_str();
        let mut counts = BTreeMap::new();
        for genre in ctx.dataset().iter().filter_map(|record| genre_of(record, field)) {
            *counts.entry(genre.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Pick a genre: hand its records to the detail store and open its plot.
    pub fn select(ctx: &AppContext, genre: &str) -> Result<RouteMatch> {
        let field = ctx.config().genre_field.as_str();
        let subset: Vec<Record> = ctx
            .dataset()
            .iter()
            .filter(|record| genre_of(record, field) == Some(genre))
            .cloned()
            .collect();
        tracing::debug!(genre, records = subset.len(), "genre selected");

        let params: Props = [("genre", genre)].into_iter().collect();
        let url = ctx.router().href(RouteTable::DETAIL_PLOT, &params)?;
        ctx.detail().set_detail_data(subset);
        ctx.counter().increment();
        ctx.router().push(&url)
    }
}

impl View for OverviewView {
    fn render(&self, ctx: &AppContext, _props: &Props) -> String {
        let genres = Self::genres(ctx);
        let counter = ctx.counter().snapshot();

        let mut out = String::new();
        let _ = writeln!(
            out,
            "overview: {} records across {} genres",
            ctx.dataset().len(),
            genres.len()
        );
        for (genre, count) in &genres {
            let _ = writeln!(out, "  {genre} ({count})");
        }
        let _ = write!(out, "counter: {} ({})", counter.count, counter.name);
        out
    }
}

/// The records of the selected genre.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailView;

impl View for DetailView {
    fn render(&self, ctx: &AppContext, props: &Props) -> String {
        let genre = props.get("genre").unwrap_or("(none)");

        let mut out = String::new();
        let _ = write!(out, "detail: {genre}");
        ctx.detail().with_detail_data(|records| {
            let _ = write!(out, "\n  records: {}", records.len());
            for record in records {
                let _ = write!(out, "\n  {record}");
            }
        });
        out
    }
}

fn genre_of<'a>(record: &'a Record, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Record::as_str)
}
