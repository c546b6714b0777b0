//! Environment tweaks applied before the desktop window starts.

const WAYLAND_DISPLAY: &str = "WAYLAND_DISPLAY";

/// Variables to set on a Wayland session, skipping any the caller already set.
///
/// - `WGPU_BACKEND=gl`: explicit-sync crashes on some drivers.
/// - `WEBKIT_DISABLE_DMABUF_RENDERER=1`: WebKit's DMABUF renderer opts into
///   explicit sync as well.
pub fn wayland_overrides<F>(is_set: F) -> Vec<(&'static str, &'static str)>
where
    F: Fn(&str) -> bool,
{
    if !is_set(WAYLAND_DISPLAY) {
        return Vec::new();
    }
    [
        ("WGPU_BACKEND", "gl"),
        ("WEBKIT_DISABLE_DMABUF_RENDERER", "1"),
    ]
    .into_iter()
    .filter(|(name, _)| !is_set(name))
    .collect()
}
