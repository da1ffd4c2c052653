use bytemuck::{Pod, Zeroable};

use crate::corner::RenderParams;

/// Uniform layout (80 bytes):
///
///  offset  0  half_size     [f32; 4]  (w/2, h/2, 0, 0)
///  offset 16  radii         [f32; 4]  (tl, tr, br, bl), clamped
///  offset 32  rect2_props   [f32; 4]  (origin.x, origin.y, half_width, half_height)
///  offset 48  corner_types  [f32; 4]  (tl, tr, br, bl), 0 = rounded, 1 = chamfered
///  offset 64  outer_uv      [f32; 4]  (u_min, v_min, u_max, v_max)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CornerUniform {
    pub half_size: [f32; 4],
    pub radii: [f32; 4],
    pub rect2_props: [f32; 4],
    pub corner_types: [f32; 4],
    pub outer_uv: [f32; 4],
}

/// Size of [`CornerUniform`] in bytes.
pub const CORNER_UNIFORM_SIZE: u64 = std::mem::size_of::<CornerUniform>() as u64;

impl From<&RenderParams> for CornerUniform {
    fn from(p: &RenderParams) -> Self {
        Self {
            half_size: [p.half_size.x, p.half_size.y, 0.0, 0.0],
            radii: p.radii.to_array(),
            rect2_props: p.reference.to_array(),
            corner_types: p.corner_styles.to_shader_vec(),
            outer_uv: p.uv.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Size, UvRect};
    use crate::corner::{refresh, CornerStyle, CornerStyles};

    #[test]
    fn layout_is_five_vec4s() {
        assert_eq!(CORNER_UNIFORM_SIZE, 80);
        assert_eq!(std::mem::align_of::<CornerUniform>(), 4);
    }

    #[test]
    fn packs_params_into_named_slots() {
        let styles = CornerStyles::new(
            CornerStyle::Rounded,
            CornerStyle::Chamfered,
            CornerStyle::Rounded,
            CornerStyle::Chamfered,
        );
        let uv = UvRect::new(0.1, 0.2, 0.3, 0.4);
        let p = refresh(Size::new(200.0, 100.0), CornerRadii::new(1.0, 2.0, 3.0, 4.0), styles, uv);

        let u = CornerUniform::from(&p);
        assert_eq!(u.half_size, [100.0, 50.0, 0.0, 0.0]);
        assert_eq!(u.radii, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(u.rect2_props, p.reference.to_array());
        assert_eq!(u.corner_types, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(u.outer_uv, [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn bytes_follow_field_order() {
        let u = CornerUniform {
            half_size: [1.0; 4],
            radii: [2.0; 4],
            rect2_props: [3.0; 4],
            corner_types: [4.0; 4],
            outer_uv: [5.0; 4],
        };
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
        assert_eq!(floats.len(), 20);
        assert_eq!(floats[4], 2.0);
        assert_eq!(floats[8], 3.0);
        assert_eq!(floats[16], 5.0);
    }
}
