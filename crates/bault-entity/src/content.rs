//! Text/binary classification, preview language detection, and size
//! formatting.

/// Suffixes of files whose content is read on upload and can be previewed.
pub const TEXT_SUFFIXES: &[&str] = &[
    ".txt", ".json", ".js", ".jsx", ".ts", ".tsx", ".md", ".env", ".config", ".xml", ".html",
    ".css", ".yml", ".yaml", ".log", ".sh", ".py", ".rb", ".java", ".c", ".cpp", ".h", ".cs",
    ".go", ".php", ".sql", ".csv",
];

/// Extension to highlighter language.
const LANGUAGES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "jsx"),
    ("ts", "typescript"),
    ("tsx", "tsx"),
    ("html", "html"),
    ("htm", "html"),
    ("xml", "xml"),
    ("svg", "xml"),
    ("css", "css"),
    ("scss", "scss"),
    ("sass", "sass"),
    ("less", "less"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("py", "python"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("cs", "csharp"),
    ("php", "php"),
    ("rb", "ruby"),
    ("go", "go"),
    ("rs", "rust"),
    ("sql", "sql"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "zsh"),
    ("fish", "fish"),
    ("ps1", "powershell"),
    ("md", "markdown"),
    ("mdx", "mdx"),
    ("env", "dotenv"),
    ("dockerfile", "dockerfile"),
    ("makefile", "makefile"),
    ("gitignore", "gitignore"),
];

/// Language used when no table entry matches.
pub const PLAIN_TEXT: &str = "text";

/// Lower-cased text after the last `.`, or the whole lower-cased name.
pub fn extension_of(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => lower,
    }
}

/// Whether a file with this name is text-like and worth reading.
pub fn is_text_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    TEXT_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

/// Highlighter language for a file name.
pub fn language_for(name: &str) -> &'static str {
    let extension = extension_of(name);
    LANGUAGES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, language)| *language)
        .unwrap_or(PLAIN_TEXT)
}

/// Human-readable byte count: `512 B`, `1.5 KB`, `3.2 MB`.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
