use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterError
{
    #[error("could not read parameter file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("bad delimiter on line {line}: expected `name{delimiter} value`")]
    BadDelimiter { line: usize, delimiter: String },
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
}

/// Reads `name: value` lines. Lines that mention none of the known names, and
/// lines starting with `#`, are ignored.
#[derive(Debug, Clone)]
pub struct ParameterReader
{
    content: String,
    names: &'static [&'static str],
}

impl ParameterReader
{
    pub fn build(file_name: &Path, names: &'static [&'static str]) -> Result<Self, ParameterError>
    {
        let content = fs::read_to_string(file_name).map_err(|source| ParameterError::Io
        {
            path: file_name.display().to_string(),
            source,
        })?;
        Ok(Self::from_content(content, names))
    }
    pub fn from_content(content: String, names: &'static [&'static str]) -> Self
    {
        Self { content, names }
    }
    pub fn parse_parameters(&self, delimiter: &str) -> Result<HashMap<&'static str, String>, ParameterError>
    {
        let mut parameter_map: HashMap<&'static str, String> = HashMap::new();
        for (line_number, line) in self.content.lines().enumerate()
        {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#')
            {
                continue;
            }
            let Some((key, value)) = line.split_once(delimiter) else
            {
                return Err(ParameterError::BadDelimiter { line: line_number + 1, delimiter: delimiter.to_owned() });
            };
            let key = key.trim();
            if let Some(&name) = self.names.iter().find(|&&name| name == key)
            {
                parameter_map.insert(name, value.trim().to_owned());
            }
        }
        Ok(parameter_map)
    }
    /// Same as [`ParameterReader::parse_parameters`], failing on the first of `required` that is absent.
    pub fn parse_required(&self, delimiter: &str, required: &[&'static str]) -> Result<HashMap<&'static str, String>, ParameterError>
    {
        let parameter_map = self.parse_parameters(delimiter)?;
        for &name in required
        {
            if !parameter_map.contains_key(name)
            {
                return Err(ParameterError::MissingParameter(name));
            }
        }
        Ok(parameter_map)
    }
}
