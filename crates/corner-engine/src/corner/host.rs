use crate::coords::UvRect;
use crate::render::CornerMaterial;

/// The runtime a [`CornerDecoration`](super::CornerDecoration) is attached to.
///
/// It supplies the rendering resource and the sprite region; everything else
/// the decoration computes itself.
pub trait CornerHost {
    type Material: CornerMaterial;

    /// Creates the material the parameters are written into.
    ///
    /// `None` means the shader or device is unavailable. Geometry is still
    /// computed, it just has nowhere to go.
    fn create_material(&mut self) -> Option<Self::Material>;

    /// Outer UV of the host's sprite, if it draws one.
    fn outer_uv(&self) -> Option<UvRect> {
        None
    }
}
