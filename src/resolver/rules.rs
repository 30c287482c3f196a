//! Construction of the window-placement rule list.

use crate::document::Section;
use crate::models::Rule;

/// Builds the ordered rule list from the `rules` section.
///
/// The window-name pattern is preserved literally (including empty);
/// an empty tag pattern becomes the no-constraint sentinel. The
/// declared output index is validated against the live output count
/// under the clamp-to-zero policy: anything outside
/// `[0, output_count)` resolves to output 0, silently. Failing safe to
/// the first output is deliberate; it is not reported as a warning.
pub fn resolve_rules(section: &Section, output_count: usize) -> Vec<Rule> {
    section
        .children("rule")
        .iter()
        .map(|sub| {
            let tags = sub.str_or("tags", "");
            Rule {
                window_pattern: sub.str_or("name", "").to_string(),
                tag_pattern: (!tags.is_empty()).then(|| tags.to_string()),
                floating: sub.bool_or("float", false),
                output: clamp_output(sub.int_or("output", 0), output_count),
            }
        })
        .collect()
}

/// Clamp-to-zero policy for declared output indices.
const fn clamp_output(declared: i64, output_count: usize) -> usize {
    if declared < 0 || declared as usize >= output_count {
        0
    } else {
        declared as usize
    }
}
