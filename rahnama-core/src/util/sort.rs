use crate::entities::OTHER_CODE;

/// Sorts (code, label) options by code and moves the
/// catch-all option to the end.
pub fn sort_options<L>(options: &mut [(&str, L)]) {
    options.sort_by(|(a, _), (b, _)| (*a == OTHER_CODE, a).cmp(&(*b == OTHER_CODE, b)));
}
