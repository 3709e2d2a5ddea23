//! Adapter Pattern page (routed as `adaptar`).
//!
//! In Rust the adapters are conversions: `From` impls and small wrappers
//! that reshape foreign data into the form the consuming code expects.

use crate::core::content::{Example, Renderable};
use crate::core::page::Tab;
use crate::patterns::{definition, use_case, use_case_unit};

const DEFINITION: &str = "\
# What is the Adapter Pattern

Lets incompatible interfaces work together. It acts as a bridge between two
**incompatible interfaces.**

# Same principle with Props Transformation

When integrating third-party libraries or APIs with different data
formats, an adapter component **transforms props** into the format its
children expect.

# How Props Transformation Works in React

- **Data format mismatch**: data from an external API or library rarely
  matches what a component expects.
- **Adapter component**: an intermediary that receives the data in its
  original format, transforms it, and passes it on.
- **Props transformation**: the reshaping happens inside the adapter, so
  children only ever see the expected props.";

const CHART_SOURCE: &str = "\
const ChartAdapter = ({ data, children }) => {
  const chartData = data.map((item) => ({
    xValue: item.x,
    yValue: item.y,
  }));
  return React.cloneElement(children, { data: chartData });
};";

const GRID_SOURCE: &str = "\
const DataGridAdapter = ({ data, children }) => {
  const gridData = data.map((item) => ({
    id: item.id,
    name: item.fullName,
    email: item.email,
  }));
  return React.cloneElement(children, { rows: gridData });
};";

const DATE_SOURCE: &str = "\
const DateAdapter = ({ dates, children }) => {
  const formattedDates = dates.map((date) => new Date(date).toISOString().split('T')[0]);
  return React.cloneElement(children, { dates: formattedDates });
};";

const LOCALIZATION_SOURCE: &str = "\
const LocalizationAdapter = ({ data, children }) => {
  const localizedData = data.reduce((acc, item) => {
    acc[item.key] = item.value;
    return acc;
  }, {});
  return React.cloneElement(children, { translations: localizedData });
};";

const IMAGE_SOURCE: &str = "\
const ImageAdapter = ({ images, children }) => {
  const formattedImages = images.map((img) => ({
    src: img.url || img.src,
    alt: img.description || img.alt,
    title: img.title || 'Untitled',
  }));
  return React.cloneElement(children, { images: formattedImages });
};";

/// Shape returned by the metrics API.
struct ApiPoint {
    x: &'static str,
    y: u32,
}

/// Shape the chart widget draws.
struct ChartPoint {
    label: &'static str,
    value: u32,
}

impl From<&ApiPoint> for ChartPoint {
    fn from(point: &ApiPoint) -> Self {
        Self {
            label: point.x,
            value: point.y,
        }
    }
}

/// The adaptee-agnostic consumer: only understands `ChartPoint`.
fn bar_chart(points: &[ChartPoint]) -> Vec<String> {
    points
        .iter()
        .map(|p| format!("{:<4} {} {}", p.label, "█".repeat(p.value as usize), p.value))
        .collect()
}

struct ChartDemo;

impl Example for ChartDemo {
    fn name(&self) -> &str {
        "ChartAdapter"
    }

    fn render(&self) -> Vec<String> {
        let api = [
            ApiPoint { x: "Mon", y: 3 },
            ApiPoint { x: "Tue", y: 7 },
            ApiPoint { x: "Wed", y: 5 },
        ];
        let adapted: Vec<ChartPoint> = api.iter().map(ChartPoint::from).collect();
        bar_chart(&adapted)
    }
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Normalize the date spellings different APIs return into `YYYY-MM-DD`.
///
/// Accepts ISO timestamps (`2024-06-01T10:30:00Z`), US dates (`06/01/2024`)
/// and day-month-year text (`1 June 2024`).
fn iso_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some((date, _time)) = raw.split_once('T') {
        return iso_date(date);
    }
    let (year, month, day) = if raw.contains('/') {
        let mut parts = raw.split('/');
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        let year = parts.next()?.parse::<u32>().ok()?;
        (year, month, day)
    } else if raw.contains(' ') {
        let mut parts = raw.split_whitespace();
        let day = parts.next()?.parse::<u32>().ok()?;
        let month_name = parts.next()?.to_ascii_lowercase();
        let month = MONTHS
            .iter()
            .position(|m| month_name.starts_with(m))
            .map(|i| i as u32 + 1)?;
        let year = parts.next()?.parse::<u32>().ok()?;
        (year, month, day)
    } else {
        let mut parts = raw.split('-');
        let year = parts.next()?.parse::<u32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        (year, month, day)
    };
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

struct DateDemo;

impl Example for DateDemo {
    fn name(&self) -> &str {
        "DateAdapter"
    }

    fn render(&self) -> Vec<String> {
        ["2024-06-01T10:30:00Z", "06/01/2024", "1 June 2024", "someday"]
            .iter()
            .map(|raw| {
                let adapted = iso_date(raw).unwrap_or_else(|| "invalid date".to_string());
                format!("{:<22} → {}", raw, adapted)
            })
            .collect()
    }
}

pub fn tabs() -> Vec<Tab> {
    vec![
        definition("What is the Adapter Pattern", DEFINITION),
        Tab::new(
            "  Integrating Chart Libraries",
            vec![use_case_unit(
                "Integrating Chart Libraries",
                "Chart libraries often require data in specific formats.",
                CHART_SOURCE,
            )
            .with_example(Renderable::new(ChartDemo))],
        ),
        use_case(
            " Normalizing Data for Data Grids",
            "Normalizing Data for Data Grids",
            "Data grids require specific row and column structures.",
            GRID_SOURCE,
        ),
        Tab::new(
            " Handling Different Date Formats",
            vec![use_case_unit(
                "Handling Different Date Formats",
                "Date formats differ across various APIs.",
                DATE_SOURCE,
            )
            .with_example(Renderable::new(DateDemo))],
        ),
        use_case(
            "Handling Localization Data",
            "Handling Localization Data",
            "Different APIs provide localization data in various formats.",
            LOCALIZATION_SOURCE,
        ),
        use_case(
            "Normalizing Image Data for Galleries",
            "Normalizing Image Data for Galleries",
            "Image data can come in various structures from different sources.",
            IMAGE_SOURCE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_date_normalizes_formats() {
        assert_eq!(iso_date("2024-06-01T10:30:00Z").as_deref(), Some("2024-06-01"));
        assert_eq!(iso_date("06/01/2024").as_deref(), Some("2024-06-01"));
        assert_eq!(iso_date("1 June 2024").as_deref(), Some("2024-06-01"));
        assert_eq!(iso_date("13/01/2024"), None);
        assert_eq!(iso_date("someday"), None);
    }

    #[test]
    fn test_chart_adapter() {
        let lines = ChartDemo.render();
        assert_eq!(lines[0], "Mon  ███ 3");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_date_demo_marks_invalid() {
        let lines = DateDemo.render();
        assert!(lines[3].ends_with("invalid date"));
    }
}
