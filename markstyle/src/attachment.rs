//! Inline attachments and the renderer seam
//!
//! The image element never decodes or draws anything. It hands the resolved URL to an
//! [`AttachmentRenderer`] supplied by the host, and stores whatever comes back as an opaque
//! [`AttachmentHandle`] inside an [`Attachment`] attribute.

use crate::style::Size;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Character that stands in for an attachment inside the text.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// Opaque, shared payload produced by a renderer
///
/// Two handles are equal only when they point at the same payload.
#[derive(Clone)]
pub struct AttachmentHandle(Arc<dyn Any + Send + Sync>);

impl AttachmentHandle {
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        AttachmentHandle(Arc::new(payload))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl PartialEq for AttachmentHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for AttachmentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AttachmentHandle(..)")
    }
}

/// What a renderer returns for a URL it could resolve
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAttachment {
    pub handle: AttachmentHandle,
    /// Intrinsic size of the rendered object
    pub natural_size: Size,
}

impl RenderedAttachment {
    pub fn new(handle: AttachmentHandle, natural_size: Size) -> Self {
        RenderedAttachment {
            handle,
            natural_size,
        }
    }
}

/// Host-provided resolver for image URLs
///
/// Called synchronously while parsing, once per image match. Implementations must return
/// promptly; the parser imposes no timeout.
pub trait AttachmentRenderer: Send + Sync {
    fn resolve(&self, url: &Url) -> Option<RenderedAttachment>;
}

impl<F> AttachmentRenderer for F
where
    F: Fn(&Url) -> Option<RenderedAttachment> + Send + Sync,
{
    fn resolve(&self, url: &Url) -> Option<RenderedAttachment> {
        self(url)
    }
}

/// The attachment attribute carried by a placeholder character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    pub source: Option<Url>,
    pub natural_size: Option<Size>,
    /// Size the host should lay the attachment out at
    pub display_size: Option<Size>,
    pub handle: Option<AttachmentHandle>,
}

impl Attachment {
    /// An empty attachment, used when nothing could be rendered.
    pub fn placeholder(source: Option<Url>) -> Self {
        Attachment {
            source,
            ..Default::default()
        }
    }

    /// Wraps a renderer result, fitting it within `max_size` when one is given.
    pub fn rendered(
        source: Option<Url>,
        rendered: RenderedAttachment,
        max_size: Option<Size>,
    ) -> Self {
        let natural = rendered.natural_size;
        let display = match max_size {
            Some(max) => fit_size(natural, max),
            None => natural,
        };
        Attachment {
            source,
            natural_size: Some(natural),
            display_size: Some(display),
            handle: Some(rendered.handle),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.handle.is_none()
    }
}

/// Scales `natural` down to fit inside `max`, keeping its aspect ratio.
///
/// Never scales up: a size already inside the bounds is returned unchanged. Degenerate sizes
/// (zero or negative) are returned as-is.
pub fn fit_size(natural: Size, max: Size) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return natural;
    }

    let target_width = natural.width.min(max.width.max(0.0));
    let target_height = natural.height.min(max.height.max(0.0));
    let ratio = (target_width / natural.width).min(target_height / natural.height);

    Size::new(natural.width * ratio, natural.height * ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_scales_down_wide_image() {
        let fitted = fit_size(Size::new(400.0, 200.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_fit_size_scales_down_tall_image() {
        let fitted = fit_size(Size::new(200.0, 400.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(50.0, 100.0));
    }

    #[test]
    fn test_fit_size_never_upscales() {
        let fitted = fit_size(Size::new(20.0, 10.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(20.0, 10.0));
    }

    #[test]
    fn test_fit_size_degenerate() {
        let fitted = fit_size(Size::new(0.0, 10.0), Size::new(100.0, 100.0));
        assert_eq!(fitted, Size::new(0.0, 10.0));
    }

    #[test]
    fn test_handle_equality_is_identity() {
        let a = AttachmentHandle::new(42u32);
        let b = AttachmentHandle::new(42u32);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.downcast_ref::<u32>(), Some(&42));
        assert_eq!(a.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_rendered_attachment_fits_max_size() {
        let rendered =
            RenderedAttachment::new(AttachmentHandle::new(()), Size::new(300.0, 150.0));
        let attachment = Attachment::rendered(None, rendered, Some(Size::new(150.0, 150.0)));
        assert_eq!(attachment.natural_size, Some(Size::new(300.0, 150.0)));
        assert_eq!(attachment.display_size, Some(Size::new(150.0, 75.0)));
        assert!(!attachment.is_placeholder());
    }

    #[test]
    fn test_closure_renderer() {
        let renderer = |_: &Url| {
            Some(RenderedAttachment::new(
                AttachmentHandle::new(()),
                Size::new(1.0, 1.0),
            ))
        };
        let url = Url::parse("http://x.test/img.png").unwrap();
        assert!(renderer.resolve(&url).is_some());
    }
}
