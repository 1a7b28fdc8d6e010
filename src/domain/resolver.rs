/// Returns the part of `name` before the first `.`, or `name` itself when it
/// has no dot. No trimming or validation: `".hidden"` yields `""`.
pub fn top_level_domain(name: &str) -> &str {
    name.split_once('.').map_or(name, |(head, _)| head)
}
