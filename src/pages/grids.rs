//! Grid demos over the sample bookings, forecasts and tracks.

use std::cmp::Ordering;

use gallery_core::Topic;
use gallery_core::data::{self, Booking, Forecast, Track};
use gallery_core::format::{format_celsius, format_currency, format_date, format_percent};
use gallery_core::inputs::SortState;
use leptos::prelude::*;

use super::{css, title};
use crate::components::widgets::{Column, Compare, DataGrid};
use crate::components::{CodeExample, Layout};

fn booking_columns() -> Vec<Column<Booking>> {
    vec![
        Column::new("id", "Id", |b: &Booking| b.id.to_string()).sortable(),
        Column::new("name", "Name", |b: &Booking| b.name.clone()).sortable(),
        Column::new("roomType", "Room Type", |b: &Booking| b.room_type.to_string()).sortable(),
        Column::new("roomNumber", "Room No", |b: &Booking| b.room_number.to_string()).sortable(),
        Column::new("cost", "Cost", |b: &Booking| format_currency(b.cost)).sortable(),
        Column::new("bookingStartDate", "Start Date", |b: &Booking| {
            format_date(b.booking_start_date)
        })
        .sortable(),
        Column::new("bookingEndDate", "End Date", |b: &Booking| {
            b.booking_end_date.map(format_date).unwrap_or_default()
        }),
        Column::new("discount", "Discount", |b: &Booking| {
            b.discount
                .as_ref()
                .map(|c| format!("{} ({})", c.id, format_percent(c.discount)))
                .unwrap_or_default()
        }),
    ]
}

fn compare_bookings(column: &'static str, a: &Booking, b: &Booking) -> Ordering {
    match column {
        "name" => a.name.cmp(&b.name),
        "roomType" => a.room_type.as_str().cmp(b.room_type.as_str()),
        "roomNumber" => a.room_number.cmp(&b.room_number),
        "cost" => a.cost.total_cmp(&b.cost),
        "bookingStartDate" => a.booking_start_date.cmp(&b.booking_start_date),
        _ => a.id.cmp(&b.id),
    }
}

#[component]
pub fn AutoQueryGridPage() -> impl IntoView {
    let sort = RwSignal::new(SortState::default());
    let compare: Compare<Booking> = compare_bookings;
    let rows = Signal::derive(data::fresh_bookings);

    let sorted_by = move || {
        sort.with(|s| match (s.column, s.direction) {
            (Some(column), Some(direction)) => format!("Sorted by {} ({:?})", column, direction),
            _ => "Unsorted".to_string(),
        })
    };

    view! {
        <Layout title=title(Topic::AutoQueryGrid)>
            <p class=css::intro>
                "A query grid binds a typed row model to column definitions and
                adds sorting by clicking a header: ascending, descending, then back
                to the original order."
            </p>
            <CodeExample
                title="Bookings"
                description="Sortable columns over the sample bookings."
                code=r#"let sort = RwSignal::new(SortState::default());
view! {
    <DataGrid rows=rows columns=booking_columns() sort=sort compare=compare />
}"#
            >
                <DataGrid rows=rows columns=booking_columns() sort=sort compare=compare />
                <p class=css::caption>{sorted_by}</p>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn DataGridPage() -> impl IntoView {
    let forecasts = Signal::derive(data::fresh_forecasts);
    let tracks = Signal::derive(data::fresh_tracks);

    let forecast_columns = vec![
        Column::new("date", "Date", |f: &Forecast| format_date(f.date)),
        Column::new("temperatureC", "Temp. (C)", |f: &Forecast| format_celsius(f.temperature_c)),
        Column::new("temperatureF", "Temp. (F)", |f: &Forecast| format!("{}°F", f.temperature_f)),
        Column::new("summary", "Summary", |f: &Forecast| f.summary.to_string()),
    ];
    let track_columns = vec![
        Column::new("name", "Name", |t: &Track| t.name.to_string()),
        Column::new("artist", "Artist", |t: &Track| t.artist.to_string()),
        Column::new("album", "Album", |t: &Track| t.album.to_string()),
        Column::new("year", "Year", |t: &Track| t.year.to_string()),
    ];

    view! {
        <Layout title=title(Topic::DataGrid)>
            <p class=css::intro>
                "DataGrid renders any list of rows. Columns are plain functions
                from a row to its cell text."
            </p>
            <CodeExample
                title="Weather forecasts"
                code=r#"Column::new("temperatureF", "Temp. (F)", |f: &Forecast| format!("{}°F", f.temperature_f))"#
            >
                <DataGrid rows=forecasts columns=forecast_columns />
            </CodeExample>
            <CodeExample
                title="Tracks"
                description="The same grid over a different row type."
                code=r#"<DataGrid rows=tracks columns=track_columns />"#
            >
                <DataGrid rows=tracks columns=track_columns />
            </CodeExample>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_bookings_by_cost() {
        let mut rows = data::fresh_bookings();
        rows.reverse();
        let sort = SortState::default().toggle("cost");
        sort.apply(&mut rows, compare_bookings);
        let ids: Vec<u32> = rows.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        sort.toggle("cost").apply(&mut rows, compare_bookings);
        assert_eq!(rows[0].id, 3);
    }

    #[test]
    fn test_booking_cells() {
        let columns = booking_columns();
        let first = &data::BOOKINGS[0];
        let cells: Vec<String> = columns.iter().map(|c| (c.cell)(first)).collect();
        assert_eq!(cells[1], "First Booking!");
        assert_eq!(cells[4], "$100.00");
        assert_eq!(cells[5], "Oct 1, 2024");
        assert_eq!(cells[7], "BOOK10 (10%)");
    }
}
