//! String puzzles.

/// Reverse the characters of `input`.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::strings::reverse;
///
/// assert_eq!(reverse("abracadabra"), "arbadacarba");
/// assert_eq!(reverse("noon"), "noon");
/// ```
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// The first character that occurs exactly once in `input`, or `None`.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::strings::first_single_char;
///
/// assert_eq!(first_single_char("abracadabra"), Some('c'));
/// assert_eq!(first_single_char("entente"), None);
/// ```
pub fn first_single_char(input: &str) -> Option<char> {
    input
        .chars()
        .find(|&candidate| input.chars().filter(|&other| other == candidate).count() == 1)
}

/// Mathematical interval notation for the range between `a` and `b`.
///
/// The smaller endpoint always comes first; inclusion flags pick square or
/// round brackets per side.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::strings::interval_string;
///
/// assert_eq!(interval_string(0, 1, true, false), "[0, 1)");
/// assert_eq!(interval_string(5, 3, true, true), "[3, 5]");
/// ```
pub fn interval_string(a: i64, b: i64, start_included: bool, end_included: bool) -> String {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{start}, {end}{close}")
}

/// Whether `input` consists entirely of properly nested bracket pairs.
///
/// Recognized pairs are `[]`, `()`, `{}` and `<>`. The empty string is
/// balanced.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::strings::brackets_balanced;
///
/// assert!(brackets_balanced("{[(<{[]}>)]}"));
/// assert!(!brackets_balanced("[[][]]["));
/// ```
pub fn brackets_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    for bracket in input.chars() {
        match bracket {
            '[' | '(' | '{' | '<' => stack.push(bracket),
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            '>' => {
                if stack.pop() != Some('<') {
                    return false;
                }
            }
            _ => return false,
        }
    }
    stack.is_empty()
}

/// Longest common directory prefix of the given full filenames.
///
/// The result always ends at a `/` boundary; when the paths share nothing
/// (not even a leading slash) the result is empty.
///
/// # Example
///
/// ```rust
/// use selectra::puzzles::strings::common_directory_path;
///
/// assert_eq!(
///     common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"]),
///     "/web/images/"
/// );
/// assert_eq!(
///     common_directory_path(&["/web/favicon.ico", "/web-scripts/dump"]),
///     "/"
/// );
/// ```
pub fn common_directory_path(paths: &[&str]) -> String {
    let Some(first) = paths.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for path in &paths[1..] {
        let common = first
            .bytes()
            .take(prefix_len)
            .zip(path.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        prefix_len = prefix_len.min(common);
    }

    // Cut back to the last directory boundary inside the common prefix.
    // Byte-wise so a divergence inside a multi-byte character cannot split it.
    let prefix = &first.as_bytes()[..prefix_len];
    match prefix.iter().rposition(|&b| b == b'/') {
        Some(slash) => first[..=slash].to_string(),
        None => String::new(),
    }
}
