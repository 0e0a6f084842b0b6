use std::fmt;
use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::error::AssetError;

/// One typed spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Date or date-time cell, kept as the calendar value Excel shows
    DateTime(NaiveDateTime),
    /// Elapsed-time cell such as `[hh]:mm:ss`
    Duration(Duration),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers come out of Excel as floats
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{:.0}", n),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::DateTime(dt) if dt.time() == NaiveTime::MIN => {
                write!(f, "{}", dt.format("%Y-%m-%d"))
            }
            Cell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Cell::Duration(d) => {
                let secs = d.num_seconds();
                write!(f, "{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
            }
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(x) => Cell::Number(*x),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Bool(*b),
            Data::Empty => Cell::Empty,
            Data::DateTime(dt) if dt.is_duration() => match dt.as_duration() {
                Some(d) => Cell::Duration(d),
                None => Cell::Number(dt.as_f64()),
            },
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => Cell::DateTime(value),
                None => Cell::Number(dt.as_f64()),
            },
            Data::DateTimeIso(_) => match data.as_datetime() {
                Some(value) => Cell::DateTime(value),
                None => match data.as_date() {
                    Some(date) => Cell::DateTime(date.and_time(NaiveTime::MIN)),
                    None => Cell::Text(data.to_string()),
                },
            },
            Data::DurationIso(_) => match data.as_duration() {
                Some(d) => Cell::Duration(d),
                None => Cell::Text(data.to_string()),
            },
            other => Cell::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    Text,
    Bool,
    DateTime,
    Duration,
    Mixed,
    Empty,
}

/// A table loaded from the first worksheet of a workbook. The first row is
/// the header; the remaining rows keep their file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Builds a dataset, fitting every row to the header width
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| AssetError::Spreadsheet(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| AssetError::Spreadsheet("workbook has no worksheets".to_string()))?
            .map_err(|e| AssetError::Spreadsheet(e.to_string()))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header) => header.iter().map(|c| c.to_string()).collect(),
            None => return Err(AssetError::Spreadsheet("worksheet is empty".to_string())),
        };
        let body: Vec<Vec<Cell>> = rows
            .map(|row| row.iter().map(Cell::from).collect())
            .collect();

        Ok(Self::from_rows(headers, body))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_type(&self, index: usize) -> ColumnType {
        let mut seen = None;
        for cell in self.rows.iter().filter_map(|row| row.get(index)) {
            let kind = match cell {
                Cell::Number(_) => ColumnType::Number,
                Cell::Text(_) => ColumnType::Text,
                Cell::Bool(_) => ColumnType::Bool,
                Cell::DateTime(_) => ColumnType::DateTime,
                Cell::Duration(_) => ColumnType::Duration,
                Cell::Empty => continue,
            };
            match seen {
                None => seen = Some(kind),
                Some(prev) if prev != kind => return ColumnType::Mixed,
                _ => {}
            }
        }
        seen.unwrap_or(ColumnType::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_counts() -> Dataset {
        Dataset::from_rows(
            vec!["Season".to_string(), "Count".to_string()],
            vec![
                vec![Cell::Text("S1".to_string()), Cell::Number(10.0)],
                vec![Cell::Text("S2".to_string()), Cell::Number(20.0)],
            ],
        )
    }

    #[test]
    fn whole_numbers_display_without_decimals() {
        assert_eq!(Cell::Number(10.0).to_string(), "10");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        assert_eq!(Cell::Empty.to_string(), "");
    }

    #[test]
    fn dates_display_as_calendar_values() {
        let day = chrono::NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(Cell::DateTime(day.and_time(NaiveTime::MIN)).to_string(), "2025-06-03");
        let noon = day.and_hms_opt(12, 30, 0).unwrap();
        assert_eq!(Cell::DateTime(noon).to_string(), "2025-06-03 12:30:00");
        assert_eq!(Cell::Duration(Duration::seconds(3725)).to_string(), "1:02:05");
    }

    #[test]
    fn excel_serial_dates_become_date_cells() {
        let serial = calamine::ExcelDateTime::new(
            45811.0,
            calamine::ExcelDateTimeType::DateTime,
            false,
        );
        let expected = chrono::NaiveDate::from_ymd_opt(2025, 6, 3)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(Cell::from(&Data::DateTime(serial)), Cell::DateTime(expected));
        assert_eq!(
            Cell::from(&Data::DateTimeIso("2025-06-03".to_string())),
            Cell::DateTime(expected)
        );
    }

    #[test]
    fn column_types_are_inferred() {
        let data = season_counts();
        assert_eq!(data.column_type(0), ColumnType::Text);
        assert_eq!(data.column_type(1), ColumnType::Number);
        assert_eq!(data.column_type(5), ColumnType::Empty);
    }

    #[test]
    fn rows_fit_the_header_width() {
        let data = Dataset::from_rows(
            vec!["A".to_string(), "B".to_string()],
            vec![
                vec![Cell::Bool(true)],
                vec![Cell::Number(1.0), Cell::Number(2.0), Cell::Number(3.0)],
            ],
        );
        assert_eq!(data.rows()[0], vec![Cell::Bool(true), Cell::Empty]);
        assert_eq!(data.rows()[1], vec![Cell::Number(1.0), Cell::Number(2.0)]);
    }

    #[test]
    fn missing_workbook_is_not_found() {
        let err = Dataset::load(Path::new("/nonexistent/Diversity_Indices.xlsx")).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
