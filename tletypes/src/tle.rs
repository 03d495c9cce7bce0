use derive_more::Display;

/// Unstructured TLE, a record split into its lines but not yet decoded
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{{name: {:?}, line1: {}, line2: {}}}", "satellite_name", "line1", "line2")]
pub struct UnstructuredTle<'a> {
    /// Optional line 0, trimmed to its first 24 columns
    pub satellite_name: Option<&'a str>,
    pub line1: &'a str,
    pub line2: &'a str,
}
