use wgpu::util::DeviceExt;

use crate::coords::UvRect;
use crate::corner::{CornerHost, RenderParams};
use crate::render::RenderCtx;

use super::{CornerUniform, CORNER_UNIFORM_SIZE};

/// Receives recomputed parameters for one decorated rectangle.
pub trait CornerMaterial {
    fn apply(&mut self, params: &RenderParams);
}

/// wgpu-backed material: one uniform buffer plus the bind group exposing it.
///
/// Host pipelines include [`bind_group_layout`](Self::bind_group_layout) in
/// their pipeline layout and bind [`bind_group`](Self::bind_group) when
/// drawing the rectangle. The buffer is rewritten only when the packed
/// uniform actually changes.
pub struct GpuCornerMaterial {
    queue: wgpu::Queue,
    ubo: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uploaded: UploadedUniform,
}

impl GpuCornerMaterial {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("corner material bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(CORNER_UNIFORM_SIZE),
                    },
                    count: None,
                }],
            });

        let ubo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("corner material ubo"),
            contents: bytemuck::bytes_of(&CornerUniform::from(&RenderParams::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("corner material bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        Self {
            queue: ctx.queue.clone(),
            ubo,
            bind_group_layout,
            bind_group,
            uploaded: UploadedUniform::default(),
        }
    }

    #[inline]
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    #[inline]
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    #[inline]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.ubo
    }

    /// Last uniform written to the GPU.
    #[inline]
    pub fn uploaded(&self) -> Option<&CornerUniform> {
        self.uploaded.last()
    }
}

impl CornerMaterial for GpuCornerMaterial {
    fn apply(&mut self, params: &RenderParams) {
        if let Some(uniform) = self.uploaded.stage(params) {
            self.queue.write_buffer(&self.ubo, 0, bytemuck::bytes_of(&uniform));
        }
    }
}

/// Last uniform written to a material's buffer.
#[derive(Debug, Default)]
struct UploadedUniform(Option<CornerUniform>);

impl UploadedUniform {
    /// Packs `params` and returns the uniform to write, or `None` when it
    /// matches the previous upload.
    fn stage(&mut self, params: &RenderParams) -> Option<CornerUniform> {
        let uniform = CornerUniform::from(params);
        if self.0 == Some(uniform) {
            return None;
        }
        self.0 = Some(uniform);
        Some(uniform)
    }

    #[inline]
    fn last(&self) -> Option<&CornerUniform> {
        self.0.as_ref()
    }
}

/// [`CornerHost`] that creates [`GpuCornerMaterial`]s on a wgpu device.
#[derive(Clone)]
pub struct GpuCornerHost {
    device: wgpu::Device,
    queue: wgpu::Queue,
    outer_uv: Option<UvRect>,
}

impl GpuCornerHost {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
            outer_uv: None,
        }
    }

    /// Sprite region to forward on the next validate. `None` keeps the current one.
    pub fn set_outer_uv(&mut self, uv: Option<UvRect>) {
        self.outer_uv = uv;
    }
}

impl CornerHost for GpuCornerHost {
    type Material = GpuCornerMaterial;

    fn create_material(&mut self) -> Option<GpuCornerMaterial> {
        let ctx = RenderCtx::new(&self.device, &self.queue);
        Some(GpuCornerMaterial::new(&ctx))
    }

    fn outer_uv(&self) -> Option<UvRect> {
        self.outer_uv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Size};
    use crate::corner::{refresh, CornerStyle, CornerStyles};

    fn params(radius: f32, style: CornerStyle) -> RenderParams {
        refresh(Size::new(120.0, 80.0), CornerRadii::all(radius), CornerStyles::all(style), UvRect::FULL)
    }

    #[test]
    fn first_params_are_always_written() {
        let mut slot = UploadedUniform::default();
        let p = params(10.0, CornerStyle::Rounded);
        assert_eq!(slot.stage(&p), Some(CornerUniform::from(&p)));
        assert_eq!(slot.last(), Some(&CornerUniform::from(&p)));
    }

    #[test]
    fn identical_params_are_not_rewritten() {
        let mut slot = UploadedUniform::default();
        let p = params(10.0, CornerStyle::Rounded);
        slot.stage(&p);
        assert_eq!(slot.stage(&p), None);
        assert_eq!(slot.stage(&params(10.0, CornerStyle::Rounded)), None);
    }

    #[test]
    fn any_changed_slot_is_rewritten() {
        let mut slot = UploadedUniform::default();
        slot.stage(&params(10.0, CornerStyle::Rounded));

        let restyled = params(10.0, CornerStyle::Chamfered);
        assert_eq!(slot.stage(&restyled), Some(CornerUniform::from(&restyled)));

        let larger = params(12.0, CornerStyle::Chamfered);
        assert_eq!(slot.stage(&larger), Some(CornerUniform::from(&larger)));
        assert_eq!(slot.last(), Some(&CornerUniform::from(&larger)));
    }
}
