//! Data Loading and Management
//!
//! Loads the scoring matrix (one row per evaluated model version and pipeline
//! step) using Polars and converts it into typed `ScoreRow`s.
//!
//! Every column is read as a string so that grade letters such as "F" or a
//! column that is still completely empty are never re-typed by inference.

use crate::catalog::ModelFamily;
use crate::error::{EvalError, Result};
use crate::scorer::{Dimension, DIMENSION_COUNT};
use polars::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

/// Columns besides the five dimensions that every matrix must carry
pub const ID_COLUMNS: [&str; 4] = ["model_family", "model_version", "step_number", "step_name"];

/// One evaluation record: a model version's output for one pipeline step
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub model_family: ModelFamily,
    pub model_version: String,
    pub step_number: u32,
    pub step_name: String,

    /// Normalized grade per dimension, indexed by `Dimension::index`.
    /// Empty string = not yet scored.
    pub grades: [String; DIMENSION_COUNT],
}

impl ScoreRow {
    /// Build a row, normalizing every grade cell the same way the loader does
    pub fn new(
        model_family: ModelFamily,
        model_version: impl Into<String>,
        step_number: u32,
        step_name: impl Into<String>,
        grades: [&str; DIMENSION_COUNT],
    ) -> Self {
        Self {
            model_family,
            model_version: model_version.into(),
            step_number,
            step_name: step_name.into(),
            grades: grades.map(|g| normalize_grade(Some(g))),
        }
    }

    /// Grade recorded for a dimension ("" when missing)
    pub fn grade(&self, dimension: Dimension) -> &str {
        &self.grades[dimension.index()]
    }

    pub fn has_any_grade(&self) -> bool {
        self.grades.iter().any(|g| !g.is_empty())
    }
}

/// Normalize a raw grade cell: null → "", trim, literal "nan" → ""
pub fn normalize_grade(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        None | Some("nan") => String::new(),
        Some(value) => value.to_string(),
    }
}

/// Parse a step number cell; integral floats ("3.0") are accepted
fn parse_step_number(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u32>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// The full ordered scoring matrix
///
/// Rows keep file order; unevaluated (model, step) combinations are absent.
#[derive(Debug, Clone, Default)]
pub struct ScoringMatrix {
    rows: Vec<ScoreRow>,
}

impl ScoringMatrix {
    pub fn new(rows: Vec<ScoreRow>) -> Self {
        Self { rows }
    }

    /// Load the scoring matrix CSV
    ///
    /// # Errors
    /// - `MissingInputFile` if `path` does not exist
    /// - `MissingColumn` if a required header is absent
    /// - `InvalidStepNumber` / `UnknownFamily` on cells that cannot be coerced
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EvalError::MissingInputFile(path.to_path_buf()));
        }

        // infer_schema_length = 0 reads every column as String
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        let matrix = Self::from_dataframe(&df)?;
        tracing::info!(
            path = %path.display(),
            rows = matrix.len(),
            steps = matrix.step_numbers().len(),
            families = matrix.families().len(),
            "loaded scoring matrix"
        );
        Ok(matrix)
    }

    /// Convert a DataFrame with the scoring matrix columns into typed rows
    ///
    /// Columns of any dtype are accepted; they are cast to strings first.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let family_col = string_column(df, "model_family")?;
        let version_col = string_column(df, "model_version")?;
        let step_col = string_column(df, "step_number")?;
        let name_col = string_column(df, "step_name")?;

        let mut grade_cols = Vec::with_capacity(DIMENSION_COUNT);
        for dim in Dimension::ALL {
            grade_cols.push(string_column(df, dim.column_name())?);
        }

        let mut rows = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            // 1-based data row number, header excluded
            let row_no = idx + 1;

            let family_raw = family_col.get(idx).unwrap_or("");
            let version_raw = version_col.get(idx).unwrap_or("");
            let step_raw = step_col.get(idx).unwrap_or("");
            if [family_raw, version_raw, step_raw].iter().all(|c| c.trim().is_empty()) {
                tracing::warn!(row = row_no, "skipping row without family, version or step");
                continue;
            }

            let model_family: ModelFamily = family_raw
                .parse()
                .map_err(|_| EvalError::UnknownFamily { row: row_no, value: family_raw.to_string() })?;

            let step_number = parse_step_number(step_raw)
                .ok_or_else(|| EvalError::InvalidStepNumber { row: row_no, value: step_raw.to_string() })?;

            let grades: [String; DIMENSION_COUNT] =
                std::array::from_fn(|d| normalize_grade(grade_cols[d].get(idx)));

            rows.push(ScoreRow {
                model_family,
                model_version: version_raw.trim().to_string(),
                step_number,
                step_name: name_col.get(idx).unwrap_or("").trim().to_string(),
                grades,
            });
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ScoreRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// False when every dimension cell of every row is empty
    pub fn has_any_scores(&self) -> bool {
        self.rows.iter().any(ScoreRow::has_any_grade)
    }

    /// Distinct step numbers, ascending
    pub fn step_numbers(&self) -> Vec<u32> {
        self.rows
            .iter()
            .map(|r| r.step_number)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct families in order of first appearance
    pub fn families(&self) -> Vec<ModelFamily> {
        let mut families = Vec::new();
        for row in &self.rows {
            if !families.contains(&row.model_family) {
                families.push(row.model_family);
            }
        }
        families
    }

    /// Distinct versions of a family in order of first appearance
    pub fn versions_of(&self, family: ModelFamily) -> Vec<&str> {
        let mut versions: Vec<&str> = Vec::new();
        for row in self.rows.iter().filter(|r| r.model_family == family) {
            if !versions.contains(&row.model_version.as_str()) {
                versions.push(&row.model_version);
            }
        }
        versions
    }

    pub fn rows_for_version<'a>(
        &'a self,
        family: ModelFamily,
        version: &'a str,
    ) -> impl Iterator<Item = &'a ScoreRow> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.model_family == family && r.model_version == version)
    }

    pub fn rows_for_step(&self, step: u32) -> impl Iterator<Item = &ScoreRow> + '_ {
        self.rows.iter().filter(move |r| r.step_number == step)
    }
}

/// Fetch a column as strings, mapping absence to `MissingColumn`
fn string_column(df: &DataFrame, name: &str) -> Result<StringChunked> {
    let column = df
        .column(name)
        .map_err(|_| EvalError::MissingColumn(name.to_string()))?;
    let as_string = column.cast(&DataType::String)?;
    Ok(as_string.str()?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "model_family,model_version,step_number,step_name,tool_selection,parameter_accuracy,output_compatibility,scientific_validity,executability";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_normalize_grade() {
        assert_eq!(normalize_grade(None), "");
        assert_eq!(normalize_grade(Some(" C ")), "C");
        assert_eq!(normalize_grade(Some("nan")), "");
        assert_eq!(normalize_grade(Some(" nan ")), "");
        // Only the lowercase token is the missing marker at load time
        assert_eq!(normalize_grade(Some("NAN")), "NAN");
    }

    #[test]
    fn test_parse_step_number() {
        assert_eq!(parse_step_number("3"), Some(3));
        assert_eq!(parse_step_number(" 7 "), Some(7));
        assert_eq!(parse_step_number("3.0"), Some(3));
        assert_eq!(parse_step_number("3.5"), None);
        assert_eq!(parse_step_number("three"), None);
        assert_eq!(parse_step_number(""), None);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ScoringMatrix::load(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, EvalError::MissingInputFile(_)));
    }

    #[test]
    fn test_load_normalizes_cells() {
        let file = write_csv(
            "openai,gpt4o,1,Basecalling, C ,C,P,S,R\n\
             openai,gpt4o,2,QC,A,,F,nan,M\n\
             claude,sonnet_4,1,Basecalling,,,,,\n",
        );
        let matrix = ScoringMatrix::load(file.path()).unwrap();

        assert_eq!(matrix.len(), 3);
        let first = &matrix.rows()[0];
        assert_eq!(first.model_family, ModelFamily::OpenAi);
        assert_eq!(first.step_number, 1);
        assert_eq!(first.grade(Dimension::ToolSelection), "C");

        let second = &matrix.rows()[1];
        assert_eq!(second.grade(Dimension::ParameterAccuracy), "");
        assert_eq!(second.grade(Dimension::ScientificValidity), "");
        assert_eq!(second.grade(Dimension::Executability), "M");

        assert!(!matrix.rows()[2].has_any_grade());
        assert!(matrix.has_any_scores());
    }

    #[test]
    fn test_load_reports_unscored_matrix() {
        let file = write_csv("openai,gpt4o,1,Basecalling,,,,,\nclaude,opus_4.5,1,Basecalling,,,,,\n");
        let matrix = ScoringMatrix::load(file.path()).unwrap();
        assert_eq!(matrix.len(), 2);
        assert!(!matrix.has_any_scores());
    }

    #[test]
    fn test_load_rejects_missing_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "model_family,model_version,step_number,step_name").unwrap();
        writeln!(file, "openai,gpt4o,1,Basecalling").unwrap();
        file.flush().unwrap();

        let err = ScoringMatrix::load(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::MissingColumn(ref c) if c == "tool_selection"));
    }

    #[test]
    fn test_load_rejects_bad_step_and_family() {
        let file = write_csv("openai,gpt4o,first,Basecalling,C,C,P,S,R\n");
        let err = ScoringMatrix::load(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::InvalidStepNumber { row: 1, .. }));

        let file = write_csv("openai,gpt4o,1,Basecalling,C,C,P,S,R\nmistral,large,1,Basecalling,C,C,P,S,R\n");
        let err = ScoringMatrix::load(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::UnknownFamily { row: 2, .. }));
    }

    #[test]
    fn test_load_skips_blank_rows() {
        let file = write_csv(
            "openai,gpt4o,1,Basecalling,C,C,P,S,R\n\
             ,,,,,,,,\n\
             claude,sonnet_4,1,Basecalling,A,C,P,S,R\n\
             ,,, ,,,,,\n",
        );
        let matrix = ScoringMatrix::load(file.path()).unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.families(), vec![ModelFamily::OpenAi, ModelFamily::Claude]);
    }

    #[test]
    fn test_load_rejects_partially_blank_row() {
        // Only rows missing all of family, version and step are dropped
        let file = write_csv("openai,gpt4o,1,Basecalling,C,C,P,S,R\n,gpt4o,2,QC,C,C,P,S,R\n");
        let err = ScoringMatrix::load(file.path()).unwrap_err();
        assert!(matches!(err, EvalError::UnknownFamily { row: 2, .. }));
    }

    #[test]
    fn test_from_dataframe_casts_numeric_steps() {
        let df = polars::df!(
            "model_family" => &["gemini", "gemini"],
            "model_version" => &["3_pro", "3_pro"],
            "step_number" => &[2i64, 1],
            "step_name" => &["QC", "Basecalling"],
            "tool_selection" => &[Some("C"), None],
            "parameter_accuracy" => &[Some("C"), None],
            "output_compatibility" => &[Some("P"), None],
            "scientific_validity" => &[Some("S"), None],
            "executability" => &[Some("R"), None],
        )
        .unwrap();

        let matrix = ScoringMatrix::from_dataframe(&df).unwrap();
        assert_eq!(matrix.step_numbers(), vec![1, 2]);
        assert_eq!(matrix.rows()[0].step_number, 2);
        assert_eq!(matrix.rows()[1].grade(Dimension::Executability), "");
    }

    #[test]
    fn test_grouping_helpers_keep_encounter_order() {
        let matrix = ScoringMatrix::new(vec![
            ScoreRow::new(ModelFamily::Claude, "opus_4.5", 2, "QC", ["C"; 5]),
            ScoreRow::new(ModelFamily::OpenAi, "gpt5", 1, "Basecalling", ["C"; 5]),
            ScoreRow::new(ModelFamily::Claude, "sonnet_4", 1, "Basecalling", ["C"; 5]),
            ScoreRow::new(ModelFamily::Claude, "opus_4.5", 1, "Basecalling", ["C"; 5]),
        ]);

        assert_eq!(matrix.families(), vec![ModelFamily::Claude, ModelFamily::OpenAi]);
        assert_eq!(matrix.versions_of(ModelFamily::Claude), vec!["opus_4.5", "sonnet_4"]);
        assert_eq!(matrix.rows_for_version(ModelFamily::Claude, "opus_4.5").count(), 2);
        assert_eq!(matrix.rows_for_step(1).count(), 3);
        assert_eq!(matrix.step_numbers(), vec![1, 2]);
    }
}
