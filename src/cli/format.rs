//! Format output dispatch helpers

/// Dispatch output by format.
///
/// # Examples
///
/// ```rust,ignore
/// output_by_format!(out.format,
///     json => { out.print_json(&value)?; },
///     human => { print_table(); }
/// );
/// ```
#[macro_export]
macro_rules! output_by_format {
    ($format:expr, json => $json:block, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => $human,
        }
    };
}
