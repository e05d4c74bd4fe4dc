use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::console::{Console, SEPARATOR};
use crate::error::{BikeshareError, Result};
use crate::filter::City;
use crate::loader::{city_data_path, open_reader};

pub const PAGE_SIZE: usize = 5;

/// The unfiltered file contents, as text, in file order.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: csv::StringRecord,
    pub rows: Vec<csv::StringRecord>,
}

impl RawTable {
    pub fn read(path: &Path) -> Result<Self> {
        let data_err = |source: csv::Error| BikeshareError::DataRead {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = open_reader(path)?;
        let headers = reader.headers().map_err(data_err)?.clone();
        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(data_err)?;
        Ok(Self { headers, rows })
    }
}

#[derive(Debug)]
pub struct Page<'a> {
    /// Row index of the first row on the page.
    pub start: usize,
    pub rows: &'a [csv::StringRecord],
    /// No rows follow this page.
    pub is_last: bool,
}

/// Walks a [`RawTable`] in fixed-size pages from the first row.
pub struct RawDataPager {
    table: RawTable,
    offset: usize,
    page_size: usize,
}

impl RawDataPager {
    pub fn new(table: RawTable, page_size: usize) -> Self {
        Self {
            table,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn headers(&self) -> &csv::StringRecord {
        &self.table.headers
    }

    pub fn next_page(&mut self) -> Option<Page<'_>> {
        let len = self.table.rows.len();
        if self.offset >= len {
            return None;
        }

        let start = self.offset;
        let end = (start + self.page_size).min(len);
        self.offset = end;
        Some(Page {
            start,
            rows: &self.table.rows[start..end],
            is_last: end >= len,
        })
    }
}

fn write_row(
    out: &mut impl Write,
    headers: &csv::StringRecord,
    index: usize,
    row: &csv::StringRecord,
) -> std::io::Result<()> {
    writeln!(out, "Row {}", index)?;
    writeln!(out, "{}", SEPARATOR)?;
    for (col, value) in row.iter().enumerate() {
        match headers.get(col).map(str::trim) {
            Some(name) if !name.is_empty() => writeln!(out, "{}: {}", name, value)?,
            _ => writeln!(out, "Unnamed: {}: {}", col, value)?,
        }
    }
    writeln!(out)
}

/// Offer to page through the city's unfiltered rows.
pub fn display_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data_dir: &Path,
    city: City,
) -> Result<()> {
    if !console.confirm("\nWould you like to display raw data? Enter yes or no. ")? {
        return Ok(());
    }

    let start_time = Instant::now();
    let path = city_data_path(data_dir, city);
    let table = RawTable::read(&path)?;
    info!(
        action = "load",
        component = "raw_data_pager",
        path = ?path,
        row_count = table.rows.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Raw data loaded"
    );

    writeln!(console.out(), "\nDisplaying Raw Data...\n")?;

    let mut pager = RawDataPager::new(table, PAGE_SIZE);
    let headers = pager.headers().clone();
    loop {
        let is_last = match pager.next_page() {
            Some(page) => {
                for (i, row) in page.rows.iter().enumerate() {
                    write_row(console.out(), &headers, page.start + i, row)?;
                }
                page.is_last
            }
            None => true,
        };

        if is_last {
            writeln!(console.out(), "No more rows to display.")?;
            break;
        }
        if !console.confirm("\nWould you like to display more rows? Enter yes or no. ")? {
            break;
        }
    }

    writeln!(console.out(), "{}", SEPARATOR)?;
    Ok(())
}
