//! File icon classification
//!
//! Maps a file name to a display icon. Name patterns are checked first, in
//! declared order, then the file extension, then a generic fallback.

/// Icon used for every directory entry.
pub const FOLDER_ICON: &str = "📂";

/// Icon used when neither a name pattern nor the extension matches.
pub const DEFAULT_ICON: &str = "📄";

/// Substring patterns matched against the lower-cased file name.
///
/// Order matters: patterns overlap, and the first match wins. `insights`
/// sits at its first declared position with the icon it was last given.
pub const NAME_PATTERNS: &[(&str, &str)] = &[
    ("readme", "📘"),
    ("license", "⚖️"),
    ("receipt", "🧾"),
    ("faq", "❓"),
    ("rules", "📖"),
    ("invitation", "💌"),
    ("agenda", "📅"),
    ("analytics", "📈"),
    ("brainstorming", "🧠"),
    ("insights", "👁️"),
    ("guidelines", "ℹ️"),
    ("tools", "🛠️"),
    ("sponsor", "💵"),
    ("finished", "✅"),
    ("bot", "🤖"),
];

/// Icon for a lower-cased extension, including the leading dot.
pub fn icon_for_extension(ext: &str) -> Option<&'static str> {
    let icon = match ext {
        ".py" => "🐍",
        ".js" => "📜",
        ".json" => "🔧",
        ".txt" => "📄",
        ".md" => "📝",
        ".html" => "🌐",
        ".css" => "🎨",
        ".jpg" | ".jpeg" | ".png" | ".gif" | ".ico" => "🖼️",
        ".mp3" | ".wav" => "🎵",
        ".mp4" => "🎞️",
        ".pdf" => "📕",
        ".gdoc" => "🗄️",
        ".xlsx" => "🧮",
        ".psd" => "🖌️",
        _ => return None,
    };
    Some(icon)
}

/// Icon for a name-pattern match, if any pattern occurs in the name.
pub fn icon_for_name(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    NAME_PATTERNS
        .iter()
        .find(|(pattern, _)| lower.contains(pattern))
        .map(|&(_, icon)| icon)
}

/// Extension of a file name: everything from the final `.`, or empty.
///
/// Leading dots belong to the name, so `.bashrc` has no extension while
/// `archive.tar.gz` has `.gz`.
///
/// # Examples
///
/// ```
/// use treemark::icons::extension_of;
///
/// assert_eq!(extension_of("main.py"), ".py");
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of(".bashrc"), "");
/// assert_eq!(extension_of("Makefile"), "");
/// ```
pub fn extension_of(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name.rfind('.') {
        Some(dot) if dot > stem_start => &name[dot..],
        _ => "",
    }
}

/// Classify a file name into an icon. Never fails.
///
/// # Examples
///
/// ```
/// use treemark::icons::classify;
///
/// assert_eq!(classify("README"), "📘");
/// assert_eq!(classify("main.py"), "🐍");
/// assert_eq!(classify("archive.tar.gz"), "📄");
/// ```
pub fn classify(name: &str) -> &'static str {
    if let Some(icon) = icon_for_name(name) {
        return icon;
    }
    icon_for_extension(&extension_of(name).to_lowercase()).unwrap_or(DEFAULT_ICON)
}
