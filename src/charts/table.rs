//! Column-oriented table of observations.

use crate::plotting::error::{PlotError, PlotResult};

/// One named column of an [`ObservationTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Label(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Label(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind(&self) -> &'static str {
        match self {
            Column::Numeric(_) => "numeric",
            Column::Label(_) => "label",
        }
    }
}

/// Ordered named columns sharing one row count.
///
/// The first column fixes the row count; later columns must match it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationTable {
    columns: Vec<(String, Column)>,
}

impl ObservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a two-column table from `(group, values)` pairs, one row per value.
    pub fn from_groups<S: AsRef<str>>(
        value_column: &str,
        group_column: &str,
        groups: &[(S, Vec<f64>)],
    ) -> PlotResult<Self> {
        let mut values = Vec::new();
        let mut labels = Vec::new();
        for (group, group_values) in groups {
            values.extend_from_slice(group_values);
            labels.extend(std::iter::repeat(group.as_ref().to_string()).take(group_values.len()));
        }
        let mut table = Self::new();
        table.add_numeric(value_column, values)?;
        table.add_labels(group_column, labels)?;
        Ok(table)
    }

    pub fn add_numeric(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> PlotResult<&mut Self> {
        self.insert(name.into(), Column::Numeric(values))
    }

    pub fn add_labels<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        labels: Vec<S>,
    ) -> PlotResult<&mut Self> {
        let labels = labels.into_iter().map(Into::into).collect();
        self.insert(name.into(), Column::Label(labels))
    }

    fn insert(&mut self, name: String, column: Column) -> PlotResult<&mut Self> {
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(PlotError::InvalidData(format!(
                "Column '{}' already exists",
                name
            )));
        }
        if let Some(rows) = self.num_rows() {
            if column.len() != rows {
                return Err(PlotError::InvalidData(format!(
                    "Column '{}' has {} rows, table has {}",
                    name,
                    column.len(),
                    rows
                )));
            }
        }
        self.columns.push((name, column));
        Ok(self)
    }

    /// Row count, or `None` before the first column is added.
    pub fn num_rows(&self) -> Option<usize> {
        self.columns.first().map(|(_, column)| column.len())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn column(&self, name: &str) -> PlotResult<&Column> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
            .ok_or_else(|| PlotError::InvalidData(format!("No column named '{}'", name)))
    }

    pub fn numeric(&self, name: &str) -> PlotResult<&[f64]> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            other => Err(wrong_kind(name, "numeric", other)),
        }
    }

    pub fn labels(&self, name: &str) -> PlotResult<&[String]> {
        match self.column(name)? {
            Column::Label(labels) => Ok(labels),
            other => Err(wrong_kind(name, "label", other)),
        }
    }

    /// Distinct labels of a column in first-seen order.
    pub fn unique_labels(&self, name: &str) -> PlotResult<Vec<String>> {
        let mut seen: Vec<String> = Vec::new();
        for label in self.labels(name)? {
            if !seen.contains(label) {
                seen.push(label.clone());
            }
        }
        Ok(seen)
    }

    /// Values of `value_column` on the rows where `group_column` equals `group`.
    pub fn values_where(
        &self,
        value_column: &str,
        group_column: &str,
        group: &str,
    ) -> PlotResult<Vec<f64>> {
        let values = self.numeric(value_column)?;
        let labels = self.labels(group_column)?;
        Ok(values
            .iter()
            .zip(labels)
            .filter(|(_, label)| label.as_str() == group)
            .map(|(&value, _)| value)
            .collect())
    }
}

fn wrong_kind(name: &str, expected: &str, found: &Column) -> PlotError {
    PlotError::InvalidData(format!(
        "Column '{}' is a {} column, expected {}",
        name,
        found.kind(),
        expected
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tips() -> ObservationTable {
        let mut table = ObservationTable::new();
        table
            .add_numeric("total_bill", vec![10.0, 20.0, 12.0, 22.0])
            .unwrap()
            .add_labels("day", vec!["Thur", "Fri", "Thur", "Fri"])
            .unwrap();
        table
    }

    #[test]
    fn test_unique_labels_first_seen_order() {
        assert_eq!(tips().unique_labels("day").unwrap(), vec!["Thur", "Fri"]);
    }

    #[test]
    fn test_values_where() {
        let values = tips().values_where("total_bill", "day", "Fri").unwrap();
        assert_eq!(values, vec![20.0, 22.0]);
    }

    #[test]
    fn test_row_count_is_enforced() {
        let mut table = tips();
        assert!(matches!(
            table.add_numeric("tip", vec![1.0]),
            Err(PlotError::InvalidData(_))
        ));
        assert!(table.add_numeric("total_bill", vec![0.0; 4]).is_err());
        assert_eq!(table.num_rows(), Some(4));
    }

    #[test]
    fn test_column_kind_and_presence() {
        let table = tips();
        assert!(table.numeric("day").is_err());
        assert!(table.labels("total_bill").is_err());
        assert!(table.numeric("tip").is_err());
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["total_bill", "day"]);
    }

    #[test]
    fn test_from_groups() {
        let table = ObservationTable::from_groups(
            "total_bill",
            "day",
            &[("Thur", vec![10.0, 12.0]), ("Fri", vec![20.0])],
        )
        .unwrap();
        assert_eq!(table.num_rows(), Some(3));
        assert_eq!(table.labels("day").unwrap()[2], "Fri");
    }
}
