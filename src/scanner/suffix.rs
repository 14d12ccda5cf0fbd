/// The lowercased concatenation of every suffix of a file name.
///
/// `zlib.TAR.gz` gives `.tar.gz`, leading dots are not suffixes (`.bashrc`
/// gives an empty chain), and a name ending in `.` has no suffixes.
pub fn suffix_chain(file_name: &str) -> String {
    if file_name.ends_with('.') {
        return String::new();
    }

    let trimmed = file_name.trim_start_matches('.');
    let mut parts = trimmed.split('.');
    parts.next();

    parts.fold(String::new(), |mut chain, part| {
        chain.push('.');
        chain.push_str(&part.to_lowercase());
        chain
    })
}
