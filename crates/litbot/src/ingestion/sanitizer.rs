//! Filename sanitization for uploads

use uuid::Uuid;

/// Length of the random disambiguation token
pub const TOKEN_LEN: usize = 6;

/// Sanitize a filename and append a fresh random token before the extension.
///
/// `"my file!.docx"` becomes something like `"my_file__3fa9c1.docx"`.
pub fn sanitize(filename: &str) -> String {
    sanitize_with_token(filename, &random_token())
}

/// Sanitize with a caller-supplied token
pub fn sanitize_with_token(filename: &str, token: &str) -> String {
    let (base, ext) = split_extension(filename);
    let safe_base: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("{}_{}{}", safe_base, token, ext)
}

/// First hex characters of a v4 UUID
pub fn random_token() -> String {
    let mut token = Uuid::new_v4().simple().to_string();
    token.truncate(TOKEN_LEN);
    token
}

/// Split at the last `.` of the final path component.
///
/// The extension keeps its leading dot. Leading dots of a dot-file are part of
/// the base, so `.bashrc` has no extension.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let name_start = filename.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    match filename.rfind('.') {
        Some(dot) if dot > name_start && filename[name_start..dot].chars().any(|c| c != '.') => {
            filename.split_at(dot)
        }
        _ => (filename, ""),
    }
}
