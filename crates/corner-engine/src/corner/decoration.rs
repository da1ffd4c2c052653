use crate::coords::{Corner, CornerRadii, Size, UvRect};
use crate::render::CornerMaterial;

use super::{refresh, CornerConfig, CornerHost, CornerStyle, CornerStyles, RenderParams};

/// Handle returned by [`CornerDecoration::on_properties_changed`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

/// Host-facing adapter for one decorated rectangle.
///
/// Owns the material and the configuration, and translates host lifecycle
/// events into recomputes:
///
/// | event                      | effect                                   |
/// |----------------------------|------------------------------------------|
/// | [`on_enable`]              | acquire material, recompute              |
/// | [`on_validate`] / setters  | acquire material if missing, recompute   |
/// | [`on_dimensions_changed`]  | recompute if enabled and a material exists |
/// | [`destroy`]                | drop material, disable                   |
///
/// Every recompute that reaches a material fires the change listeners once.
///
/// [`on_enable`]: Self::on_enable
/// [`on_validate`]: Self::on_validate
/// [`on_dimensions_changed`]: Self::on_dimensions_changed
/// [`destroy`]: Self::destroy
pub struct CornerDecoration<H: CornerHost> {
    host: H,
    material: Option<H::Material>,

    config: CornerConfig,
    outer_uv: UvRect,
    size: Size,
    enabled: bool,

    params: Option<RenderParams>,
    changed: bool,
    warned_missing_material: bool,

    listeners: Vec<(ListenerId, Box<dyn FnMut()>)>,
    next_listener: u64,
}

impl<H: CornerHost> CornerDecoration<H> {
    pub fn new(host: H, config: CornerConfig) -> Self {
        Self {
            host,
            material: None,
            config,
            outer_uv: UvRect::FULL,
            size: Size::zero(),
            enabled: false,
            params: None,
            changed: false,
            warned_missing_material: false,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &CornerConfig {
        &self.config
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn material(&self) -> Option<&H::Material> {
        self.material.as_ref()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn outer_uv(&self) -> UvRect {
        self.outer_uv
    }

    /// Params from the most recent recompute.
    #[inline]
    pub fn params(&self) -> Option<&RenderParams> {
        self.params.as_ref()
    }

    /// Whether the most recent recompute produced different params than the one before.
    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// The host started drawing the rectangle at `size`.
    pub fn on_enable(&mut self, size: Size) -> RenderParams {
        self.enabled = true;
        self.size = size;
        self.validate();
        self.refresh()
    }

    /// The host stopped drawing the rectangle. The material is kept.
    pub fn on_disable(&mut self) {
        self.enabled = false;
    }

    /// Configuration was edited.
    pub fn on_validate(&mut self) -> RenderParams {
        self.validate();
        self.refresh()
    }

    /// Layout resized the rectangle.
    ///
    /// Returns `None` when the decoration is disabled or has no material; the
    /// new size is still remembered for the next recompute.
    pub fn on_dimensions_changed(&mut self, size: Size) -> Option<RenderParams> {
        self.size = size;
        if self.enabled && self.material.is_some() {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Releases the material. The decoration can be re-enabled afterwards.
    pub fn destroy(&mut self) {
        if self.material.take().is_some() {
            log::debug!("corner material released");
        }
        self.enabled = false;
    }

    /// Acquires the material if missing and picks up the host's sprite UV.
    ///
    /// Returns whether a material is attached afterwards.
    pub fn validate(&mut self) -> bool {
        if self.material.is_none() {
            self.material = self.host.create_material();
            if self.material.is_some() {
                log::debug!("corner material acquired");
            }
        }

        if let Some(uv) = self.host.outer_uv() {
            self.outer_uv = uv;
        }

        self.material.is_some()
    }

    /// Recomputes params from the current size and configuration.
    ///
    /// Params are always computed and cached. They are written to the material
    /// and announced to listeners only when a material is attached.
    pub fn refresh(&mut self) -> RenderParams {
        let params = refresh(self.size, self.config.radii, self.config.styles, self.outer_uv);

        self.changed = self.params != Some(params);
        self.params = Some(params);

        log::trace!(
            "corner refresh: size={:?} radii={:?} reference={:?}",
            self.size,
            params.radii,
            params.reference
        );

        match self.material.as_mut() {
            Some(material) => {
                material.apply(&params);
                self.warned_missing_material = false;
                self.notify();
            }
            None => {
                if !self.warned_missing_material {
                    log::warn!("corner material unavailable; geometry computed but not uploaded");
                    self.warned_missing_material = true;
                }
            }
        }

        params
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn set_config(&mut self, config: CornerConfig) -> RenderParams {
        self.config = config;
        self.on_validate()
    }

    pub fn set_radii(&mut self, radii: CornerRadii) -> RenderParams {
        self.config.radii = radii;
        self.on_validate()
    }

    pub fn set_radius(&mut self, corner: Corner, radius: f32) -> RenderParams {
        self.config.radii.set(corner, radius);
        self.on_validate()
    }

    pub fn set_styles(&mut self, styles: CornerStyles) -> RenderParams {
        self.config.styles = styles;
        self.on_validate()
    }

    pub fn set_style(&mut self, corner: Corner, style: CornerStyle) -> RenderParams {
        self.config.styles.set(corner, style);
        self.on_validate()
    }

    // ── listeners ─────────────────────────────────────────────────────────

    /// Registers `f` to run after every recompute that reached the material.
    pub fn on_properties_changed(&mut self, f: impl FnMut() + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push((id, Box::new(f)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        for (_, f) in &mut self.listeners {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::geometry::clamp_radii;

    #[derive(Default)]
    struct Recorder {
        applied: RefCell<Vec<RenderParams>>,
        created: Cell<u32>,
    }

    struct RecordingMaterial(Rc<Recorder>);

    impl CornerMaterial for RecordingMaterial {
        fn apply(&mut self, params: &RenderParams) {
            self.0.applied.borrow_mut().push(*params);
        }
    }

    struct TestHost {
        available: bool,
        uv: Option<UvRect>,
        rec: Rc<Recorder>,
    }

    impl CornerHost for TestHost {
        type Material = RecordingMaterial;

        fn create_material(&mut self) -> Option<RecordingMaterial> {
            if !self.available {
                return None;
            }
            self.rec.created.set(self.rec.created.get() + 1);
            Some(RecordingMaterial(self.rec.clone()))
        }

        fn outer_uv(&self) -> Option<UvRect> {
            self.uv
        }
    }

    fn decoration(available: bool) -> (CornerDecoration<TestHost>, Rc<Recorder>) {
        let rec = Rc::new(Recorder::default());
        let host = TestHost { available, uv: None, rec: rec.clone() };
        (CornerDecoration::new(host, CornerConfig::default()), rec)
    }

    fn counter(d: &mut CornerDecoration<TestHost>) -> Rc<Cell<u32>> {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        d.on_properties_changed(move || h.set(h.get() + 1));
        hits
    }

    // ── enable / validate ─────────────────────────────────────────────────

    #[test]
    fn enable_acquires_material_and_uploads() {
        let (mut d, rec) = decoration(true);
        let size = Size::new(200.0, 100.0);
        let params = d.on_enable(size);

        assert!(d.is_enabled());
        assert!(d.material().is_some());
        assert_eq!(rec.created.get(), 1);
        assert_eq!(rec.applied.borrow().as_slice(), &[params]);
        assert_eq!(params.radii, clamp_radii(size, CornerRadii::all(40.0)));
    }

    #[test]
    fn validate_does_not_recreate_existing_material() {
        let (mut d, rec) = decoration(true);
        d.on_enable(Size::new(50.0, 50.0));
        d.on_validate();
        d.on_validate();
        assert_eq!(rec.created.get(), 1);
        assert_eq!(rec.applied.borrow().len(), 3);
    }

    #[test]
    fn validate_picks_up_sprite_uv() {
        let (mut d, _rec) = decoration(true);
        let uv = UvRect::new(0.5, 0.0, 1.0, 0.5);
        d.host_mut().uv = Some(uv);
        let params = d.on_enable(Size::new(10.0, 10.0));
        assert_eq!(params.uv, uv);
        assert_eq!(d.outer_uv(), uv);
    }

    // ── listeners ─────────────────────────────────────────────────────────

    #[test]
    fn listeners_fire_once_per_recompute() {
        let (mut d, _rec) = decoration(true);
        let hits = counter(&mut d);

        d.on_enable(Size::new(100.0, 100.0));
        assert_eq!(hits.get(), 1);

        d.set_radius(Corner::TopLeft, 12.0);
        d.set_style(Corner::BottomRight, CornerStyle::Chamfered);
        assert_eq!(hits.get(), 3);

        d.on_dimensions_changed(Size::new(300.0, 80.0));
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let (mut d, _rec) = decoration(true);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let id = d.on_properties_changed(move || h.set(h.get() + 1));

        assert!(d.remove_listener(id));
        assert!(!d.remove_listener(id));
        d.on_enable(Size::new(100.0, 100.0));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn changed_tracks_param_differences() {
        let (mut d, _rec) = decoration(true);
        d.on_enable(Size::new(100.0, 100.0));
        assert!(d.changed());

        d.refresh();
        assert!(!d.changed());

        d.on_dimensions_changed(Size::new(120.0, 100.0));
        assert!(d.changed());
    }

    // ── missing material ──────────────────────────────────────────────────

    #[test]
    fn missing_material_still_computes_geometry() {
        let (mut d, rec) = decoration(false);
        let hits = counter(&mut d);

        let size = Size::new(100.0, 100.0);
        let params = d.on_enable(size);

        assert!(d.material().is_none());
        assert_eq!(params.radii, clamp_radii(size, CornerRadii::all(40.0)));
        assert_eq!(d.params(), Some(&params));
        assert_eq!(hits.get(), 0);
        assert!(rec.applied.borrow().is_empty());
    }

    #[test]
    fn material_is_acquired_once_it_becomes_available() {
        let (mut d, rec) = decoration(false);
        d.on_enable(Size::new(100.0, 100.0));
        assert!(!d.validate());

        d.host_mut().available = true;
        d.on_validate();
        assert!(d.material().is_some());
        assert_eq!(rec.applied.borrow().len(), 1);
    }

    // ── dimensions / destroy ──────────────────────────────────────────────

    #[test]
    fn resize_is_ignored_while_disabled() {
        let (mut d, rec) = decoration(true);
        d.on_enable(Size::new(100.0, 100.0));
        d.on_disable();

        assert!(d.on_dimensions_changed(Size::new(10.0, 10.0)).is_none());
        assert_eq!(rec.applied.borrow().len(), 1);
        assert_eq!(d.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn resize_is_ignored_without_material() {
        let (mut d, _rec) = decoration(false);
        d.on_enable(Size::new(100.0, 100.0));
        assert!(d.on_dimensions_changed(Size::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn resize_reclamps_against_new_size() {
        let (mut d, _rec) = decoration(true);
        d.on_enable(Size::new(400.0, 400.0));
        let small = Size::new(40.0, 40.0);
        let params = d.on_dimensions_changed(small);
        assert_eq!(params.map(|p| p.radii), Some(clamp_radii(small, CornerRadii::all(40.0))));
        // The requested radii survive clamping.
        assert_eq!(d.config().radii, CornerRadii::all(40.0));
    }

    #[test]
    fn destroy_releases_material_and_disables() {
        let (mut d, rec) = decoration(true);
        d.on_enable(Size::new(100.0, 100.0));
        d.destroy();

        assert!(d.material().is_none());
        assert!(!d.is_enabled());
        assert!(d.on_dimensions_changed(Size::new(50.0, 50.0)).is_none());

        d.on_enable(Size::new(50.0, 50.0));
        assert_eq!(rec.created.get(), 2);
    }
}
