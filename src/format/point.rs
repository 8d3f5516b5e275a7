//! Data point records.

use ratatui::style::Color;

/// A single field value on a data point.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Textual field (year labels, entity names, units).
    Text(&'static str),
    /// Numeric field (prices, counts, percentages).
    Number(f64),
}

/// One record of a chart's underlying dataset.
///
/// A data point is a small bag of named fields plus an optional color
/// carried by the record itself. All points are built once from the static
/// datasets at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct DataPoint {
    fields: Vec<(&'static str, Field)>,
    /// Color defined by the record itself (pie slices, bar rows).
    pub color: Option<Color>,
}

impl DataPoint {
    /// Create an empty data point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field.
    pub fn text_field(mut self, name: &'static str, value: &'static str) -> Self {
        self.fields.push((name, Field::Text(value)));
        self
    }

    /// Add a numeric field.
    pub fn number_field(mut self, name: &'static str, value: f64) -> Self {
        self.fields.push((name, Field::Number(value)));
        self
    }

    /// Attach the record's own color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Look up a text field by name.
    pub fn text(&self, name: &str) -> Option<&'static str> {
        match self.get(name) {
            Some(Field::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Look up a numeric field by name.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Field::Number(value)) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_looked_up_by_name() {
        let point = DataPoint::new()
            .text_field("year", "2017")
            .number_field("price", 19000.0);

        assert_eq!(point.text("year"), Some("2017"));
        assert_eq!(point.number("price"), Some(19000.0));
        assert_eq!(point.text("price"), None);
        assert!(point.get("missing").is_none());
    }

    #[test]
    fn color_is_carried_by_the_record() {
        let point = DataPoint::new().with_color(Color::Rgb(247, 147, 26));
        assert_eq!(point.color, Some(Color::Rgb(247, 147, 26)));
    }
}
