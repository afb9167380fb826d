/// Best-effort content-type probe.
///
/// Looks the extension up in a fixed MIME table first. If the extension is
/// missing or unknown, the first bytes of the file are sniffed for a few
/// well-known signatures. `None` means the type could not be determined;
/// callers render that as `unknown`.
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from the start of a file for signature sniffing.
const SNIFF_LEN: usize = 16;

/// Probe a file's MIME type. Never fails: unreadable files yield `None`.
pub fn probe_content_type(path: &Path) -> Option<&'static str> {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(mime_for_extension);
    by_extension.or_else(|| sniff_file(path))
}

/// MIME type for a file extension, case-insensitive.
///
/// Extensions are lowercased into a stack buffer; anything longer than the
/// buffer is unknown.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let bytes = ext.as_bytes();
    if bytes.is_empty() || bytes.len() > 8 {
        return None;
    }
    let mut lower = [0u8; 8];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

    let mime = match lower_str {
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "rtf" => "application/rtf",
        "epub" => "application/epub+zip",
        // Text
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "xml" => "application/xml",
        "json" => "application/json",
        "js" => "text/javascript",
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "ico" => "image/vnd.microsoft.icon",
        "heic" => "image/heic",
        // Video
        "mp4" | "m4v" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "wmv" => "video/x-ms-wmv",
        "mpg" | "mpeg" => "video/mpeg",
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        // Archives
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        _ => return None,
    };
    Some(mime)
}

fn sniff_file(path: &Path) -> Option<&'static str> {
    let mut head = [0u8; SNIFF_LEN];
    let mut file = File::open(path).ok()?;
    let n = file.read(&mut head).ok()?;
    sniff(&head[..n])
}

/// Match a file's leading bytes against known signatures.
pub fn sniff(head: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"%PDF-", "application/pdf"),
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"PK\x03\x04", "application/zip"),
        (b"\x1f\x8b", "application/gzip"),
        (b"7z\xbc\xaf\x27\x1c", "application/x-7z-compressed"),
        (b"ID3", "audio/mpeg"),
        (b"\x1a\x45\xdf\xa3", "video/x-matroska"),
    ];

    if let Some(&(_, mime)) = SIGNATURES.iter().find(|(sig, _)| head.starts_with(sig)) {
        return Some(mime);
    }

    // RIFF containers carry their form type at offset 8.
    if head.len() >= 12 && head.starts_with(b"RIFF") {
        return match &head[8..12] {
            b"AVI " => Some("video/x-msvideo"),
            b"WAVE" => Some("audio/wav"),
            b"WEBP" => Some("image/webp"),
            _ => None,
        };
    }

    // ISO base media files start with a box size, then `ftyp`.
    if head.len() >= 8 && &head[4..8] == b"ftyp" {
        return Some("video/mp4");
    }

    None
}
