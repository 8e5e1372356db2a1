//! Tabular data with typed column definitions and optional header sorting.

use std::cmp::Ordering;

use gallery_core::inputs::{SortDirection, SortState};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

/// Column comparator used when a grid is sortable.
pub type Compare<T> = fn(&'static str, &T, &T) -> Ordering;

/// One grid column: key, header text and how to render a cell.
pub struct Column<T> {
    pub key: &'static str,
    pub header: &'static str,
    pub cell: fn(&T) -> String,
    pub sortable: bool,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> Column<T> {
    pub const fn new(key: &'static str, header: &'static str, cell: fn(&T) -> String) -> Self {
        Self {
            key,
            header,
            cell,
            sortable: false,
        }
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Data grid.
///
/// With `sort` and `compare`, clicking a sortable header cycles
/// ascending → descending → unsorted.
#[component]
pub fn DataGrid<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] sort: Option<RwSignal<SortState>>,
    #[prop(optional)] compare: Option<Compare<T>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let head = columns
        .iter()
        .map(|col| header_cell(col.key, col.header, sort.filter(|_| col.sortable)))
        .collect_view();

    let body = move || {
        let mut rows = rows.get();
        if let (Some(sort), Some(compare)) = (sort, compare) {
            sort.get().apply(&mut rows, compare);
        }
        if rows.is_empty() {
            return view! {
                <tr><td class=css::gridEmpty colspan=columns.len().to_string()>"No results"</td></tr>
            }
            .into_any();
        }
        rows.iter()
            .map(|row| {
                view! {
                    <tr>
                        {columns
                            .iter()
                            .map(|col| view! { <td>{(col.cell)(row)}</td> })
                            .collect_view()}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class=css::gridWrap>
            <table class=css::grid>
                <thead>
                    <tr>{head}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

fn header_cell(
    key: &'static str,
    header: &'static str,
    sort: Option<RwSignal<SortState>>,
) -> AnyView {
    let Some(sort) = sort else {
        return view! { <th>{header}</th> }.into_any();
    };

    let direction = move || sort.with(|s| s.direction_of(key));
    let aria_sort = move || match direction() {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };

    view! {
        <th aria-sort=aria_sort>
            <button
                class=css::sortButton
                on:click=move |_| sort.update(|s| *s = s.toggle(key))
            >
                <span>{header}</span>
                {move || match direction() {
                    Some(SortDirection::Ascending) => Some(view! { <Icon icon=ic::CHEVRON_UP /> }.into_any()),
                    Some(SortDirection::Descending) => Some(view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()),
                    None => None,
                }}
            </button>
        </th>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[derive(Clone)]
    struct Row {
        name: &'static str,
        size: u32,
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name", |r: &Row| r.name.to_string()).sortable(),
            Column::new("size", "Size", |r: &Row| r.size.to_string()),
        ]
    }

    fn compare(column: &'static str, a: &Row, b: &Row) -> Ordering {
        match column {
            "name" => a.name.cmp(b.name),
            _ => a.size.cmp(&b.size),
        }
    }

    fn rows() -> Signal<Vec<Row>> {
        Signal::derive(|| {
            vec![
                Row { name: "beta", size: 2 },
                Row { name: "alpha", size: 1 },
                Row { name: "gamma", size: 3 },
            ]
        })
    }

    #[test]
    fn test_renders_headers_and_cells() {
        let html = render_at("/", || view! { <DataGrid rows=rows() columns=columns() /> });
        assert!(html.contains("Name"));
        assert!(html.contains("Size"));
        assert_eq!(html.matches("<tr").count(), 4);
        assert!(html.find("beta").unwrap() < html.find("alpha").unwrap());
    }

    #[test]
    fn test_sorted_descending() {
        let html = render_at("/", || {
            let sort = RwSignal::new(SortState {
                column: Some("name"),
                direction: Some(SortDirection::Descending),
            });
            let compare: Compare<Row> = compare;
            view! { <DataGrid rows=rows() columns=columns() sort=sort compare=compare /> }
        });
        let gamma = html.find("gamma").unwrap();
        let beta = html.find("beta").unwrap();
        let alpha = html.find("alpha").unwrap();
        assert!(gamma < beta && beta < alpha);
        assert!(html.contains("aria-sort=\"descending\""));
    }

    #[test]
    fn test_empty_rows() {
        let html = render_at("/", || {
            let rows: Signal<Vec<Row>> = Signal::derive(Vec::new);
            view! { <DataGrid rows=rows columns=columns() /> }
        });
        assert!(html.contains("No results"));
    }
}
