use crate::{
    error::ConfigError,
    film::Image,
    hittable::Hit,
    interval::Interval,
    material::Scatter,
    output::ImageSink,
    ray::Ray,
    vec3::{Color, Point3, Vec3},
    vec3_ext::Vec3Ext,
};
use indicatif::{ParallelProgressIterator, ProgressBar};
use itertools::Itertools;
use log::{debug, info, warn};
use rand::{
    distributions::{Distribution, Uniform},
    seq::SliceRandom,
    thread_rng, Rng, RngCore, SeedableRng,
};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex, PoisonError, RwLock,
    },
    time::{Duration, Instant},
};

pub type Float = f64;

/// Scattered rays ignore hits closer than this, which would be the surface they just left
pub const T_MIN: Float = 0.001;

/// Everything needed to set up a camera. Read-only once a `Camera` is built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    /// Image width over height
    pub aspect_ratio: Float,
    pub image_width: u32,
    pub samples_per_pixel: u32,
    /// Maximum number of bounces per sample
    pub max_depth: u32,
    /// Vertical field of view in degrees
    pub vertical_fov: Float,
    pub lookfrom: Point3,
    pub lookat: Point3,
    /// Camera-relative up direction, need not be perpendicular to the view
    pub up: Vec3,
    /// Variation angle of rays through each pixel, in degrees. 0 disables depth of field.
    pub defocus_angle: Float,
    /// Distance from `lookfrom` to the plane of perfect focus
    pub focus_distance: Float,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            aspect_ratio: 1.0,
            image_width: 900,
            samples_per_pixel: 10,
            max_depth: 50,
            vertical_fov: 90.0,
            lookfrom: Vec3::ZERO,
            lookat: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_distance: 10.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    image_height: u32,
    center: Point3,
    pixel00_loc: Point3,
    pixel_du: Vec3,
    pixel_dv: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    sample_scale: Float,
}

/// Knobs for a single render pass
#[derive(Clone)]
pub struct RenderControl {
    /// Each pixel samples from its own stream of this seed, so equal seeds give equal images
    pub seed: u64,
    /// Visit pixels in random order. Only affects how snapshots fill in.
    pub shuffle: bool,
    pub progress: ProgressBar,
    /// Checked before each pixel; set it to abandon the pass
    pub stop: Arc<AtomicBool>,
    /// Hand a copy of the grid to the snapshot sink every this many finished pixels
    pub snapshot_every: Option<usize>,
}

impl Default for RenderControl {
    fn default() -> Self {
        RenderControl {
            seed: thread_rng().gen(),
            shuffle: false,
            progress: ProgressBar::hidden(),
            stop: Arc::new(AtomicBool::new(false)),
            snapshot_every: None,
        }
    }
}

#[derive(Debug)]
pub struct RenderOutput {
    /// Pixels that were never rendered (after a stop) are left white
    pub image: Image,
    pub pixels_rendered: usize,
    pub stopped: bool,
    pub elapsed: Duration,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Result<Self, ConfigError> {
        if config.image_width == 0 {
            return Err(ConfigError::ImageWidth);
        }
        if config.samples_per_pixel == 0 {
            return Err(ConfigError::SamplesPerPixel);
        }
        if !(config.aspect_ratio.is_finite() && config.aspect_ratio > 0.0) {
            return Err(ConfigError::AspectRatio(config.aspect_ratio));
        }
        if !(config.focus_distance.is_finite() && config.focus_distance > 0.0) {
            return Err(ConfigError::FocusDistance(config.focus_distance));
        }

        let image_width = config.image_width;
        let image_height = ((image_width as Float / config.aspect_ratio) as u32).max(1);

        let view = config.lookfrom - config.lookat;
        let side = config.up.cross(view);
        if view.near_zero() || side.length() <= 1e-12 * view.length() * config.up.length() {
            return Err(ConfigError::DegenerateView);
        }
        // Camera frame: u right, v up, w backward (away from the scene)
        let w = view.normalized();
        let u = side.normalized();
        let v = w.cross(u);

        let h = (config.vertical_fov.to_radians() / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_distance;
        // Use the real pixel ratio, the integer height may not match aspect_ratio exactly
        let viewport_width = viewport_height * (image_width as Float / image_height as Float);

        // Displacement vectors from left to right and top to bottom of viewport
        let viewport_u = u * viewport_width; // Left to right across horizontal edge
        let viewport_v = -v * viewport_height; // Down vertical edge

        let pixel_du = viewport_u / image_width as Float;
        let pixel_dv = viewport_v / image_height as Float;

        let center = config.lookfrom;
        let vp_upper_left =
            center - (w * config.focus_distance) - viewport_u / 2.0 - viewport_v / 2.0;

        // Top left pixel center
        let pixel00_loc = vp_upper_left + (pixel_du + pixel_dv) * 0.5;

        let defocus_radius = config.focus_distance * (config.defocus_angle / 2.0).to_radians().tan();
        let defocus_disk_u = u * defocus_radius;
        let defocus_disk_v = v * defocus_radius;

        debug!(
            "Camera {}x{}, viewport {:.3}x{:.3}, defocus radius {:.4}",
            image_width, image_height, viewport_width, viewport_height, defocus_radius
        );

        Ok(Camera {
            sample_scale: 1.0 / config.samples_per_pixel as Float,
            config,
            image_height,
            center,
            pixel00_loc,
            pixel_du,
            pixel_dv,
            defocus_disk_u,
            defocus_disk_v,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn image_width(&self) -> u32 {
        self.config.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Return a camera ray originating from the defocus disk and directed at a random
    /// point around the pixel location `x, y`.
    pub fn get_ray<R: Rng + ?Sized>(&self, x: u32, y: u32, rng: &mut R) -> Ray {
        // Offsets uniformly distributed within 1/2 pixel ensure 100% coverage with 0 overlap
        let range = Uniform::from(-0.5..0.5);
        let x_offset: Float = range.sample(rng);
        let y_offset: Float = range.sample(rng);
        let pixel_sample = self.pixel00_loc
            + (self.pixel_du * (x as Float + x_offset))
            + (self.pixel_dv * (y as Float + y_offset));
        let ray_origin = if self.config.defocus_angle <= 0.0 {
            self.center // no blur
        } else {
            self.defocus_disk_sample(rng) // random blur
        };
        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Returns a random point in the camera's defocus disk
    fn defocus_disk_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point3 {
        let p = Vec3::random_in_unit_disc(rng);
        self.center + (self.defocus_disk_u * p.x) + (self.defocus_disk_v * p.y)
    }

    /// Average of `samples_per_pixel` independent samples through pixel `x, y`
    pub fn render_pixel(&self, scene: &dyn Hit, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
        let sum: Color = (0..self.config.samples_per_pixel)
            .map(|_| {
                let ray = self.get_ray(x, y, rng);
                ray_color(&ray, scene, self.config.max_depth, rng)
            })
            .sum();
        sum * self.sample_scale
    }

    /// Independent generator for one pixel, the same no matter which thread or order renders it
    fn pixel_rng(&self, seed: u64, x: u32, y: u32) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(y as u64 * self.config.image_width as u64 + x as u64);
        rng
    }

    /// Renders with a random seed and no progress reporting or snapshots
    pub fn render(&self, scene: &dyn Hit) -> Image {
        self.render_with(scene, &RenderControl::default(), None).image
    }

    pub fn render_with(
        &self,
        scene: &dyn Hit,
        control: &RenderControl,
        snapshot_sink: Option<&Mutex<dyn ImageSink + Send>>,
    ) -> RenderOutput {
        let width = self.config.image_width;
        let height = self.image_height;

        let mut pixels: Vec<(u32, u32)> = (0..height)
            .cartesian_product(0..width)
            .map(|(y, x)| (x, y))
            .collect();
        if control.shuffle {
            pixels.shuffle(&mut setup_rng(control.seed));
        }
        let total = pixels.len();

        // White so that pixels missing from a snapshot read as blank
        let grid = RwLock::new(Image::filled(width, height, Color::ONE));
        let finished = AtomicUsize::new(0);
        let snapshots = match (control.snapshot_every, snapshot_sink) {
            (Some(every), Some(sink)) if every > 0 => Some((every, sink)),
            _ => None,
        };

        info!(
            "Rendering {}x{} at {} samples per pixel on {} threads (seed {})",
            width,
            height,
            self.config.samples_per_pixel,
            rayon::current_num_threads(),
            control.seed
        );
        let start = Instant::now();
        control.progress.reset();
        control.progress.set_length(total as u64);

        pixels
            .par_iter()
            .progress_with(control.progress.clone())
            .for_each(|&(x, y)| {
                if control.stop.load(Ordering::Relaxed) {
                    return;
                }
                let mut rng = self.pixel_rng(control.seed, x, y);
                let color = self.render_pixel(scene, x, y, &mut rng);
                grid.write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .set(x, y, color);

                let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some((every, sink)) = snapshots {
                    if done % every == 0 && done < total {
                        // Copy while holding the sink so frames reach it in render order.
                        // The grid read lock is released before encoding.
                        let mut sink = sink.lock().unwrap_or_else(PoisonError::into_inner);
                        let snapshot = grid.read().unwrap_or_else(PoisonError::into_inner).clone();
                        if let Err(err) = sink.write(&snapshot) {
                            warn!("Failed to write snapshot after {} pixels: {}", done, err);
                        }
                    }
                }
            });

        let elapsed = start.elapsed();
        let pixels_rendered = finished.into_inner();
        let stopped = pixels_rendered < total;
        if stopped {
            control.progress.abandon();
            warn!(
                "Render stopped after {} of {} pixels",
                pixels_rendered, total
            );
        } else {
            control.progress.finish();
        }

        let rays = pixels_rendered as f64 * self.config.samples_per_pixel as f64;
        info!(
            "Rendered {} pixels in {:.2} s, {:.2} million camera rays/second",
            pixels_rendered,
            elapsed.as_secs_f64(),
            rays / 1_000_000.0 / elapsed.as_secs_f64().max(f64::EPSILON)
        );

        RenderOutput {
            image: grid.into_inner().unwrap_or_else(PoisonError::into_inner),
            pixels_rendered,
            stopped,
            elapsed,
        }
    }
}

/// Stream of `seed` reserved for work outside the pixels, like scene layout and pixel order.
/// Pixel streams are `y * width + x`, which never reaches it.
pub const SETUP_STREAM: u64 = u64::MAX;

/// Generator for scene layout and pixel order, uncorrelated with every pixel's samples
pub fn setup_rng(seed: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(SETUP_STREAM);
    rng
}

/// Radiance arriving along `ray`, following scattered rays for at most `depth` bounces
pub fn ray_color(ray: &Ray, scene: &dyn Hit, depth: u32, rng: &mut dyn RngCore) -> Color {
    if depth == 0 {
        return Color::ZERO; // Bounce limit reached, no more light is gathered
    }
    match scene.hit(ray, &Interval::new(T_MIN, Float::INFINITY)) {
        Some(hit) => match hit.material.scatter(ray, &hit, rng) {
            Some((attenuation, scattered)) => {
                attenuation * ray_color(&scattered, scene, depth - 1, rng)
            }
            None => Color::ZERO, // absorbed
        },
        None => sky_color(ray),
    }
}

/// Vertical gradient from white at the horizon to sky blue at the zenith
pub fn sky_color(ray: &Ray) -> Color {
    let unit_dir = ray.direction.normalized();
    let a = 0.5 * (unit_dir.y + 1.0);
    Color::ONE * (1.0 - a) + Color::new(0.5, 0.7, 1.0) * a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::OutputError,
        hittable::{Scene, Sphere},
        material::{Dielectric, Lambertian, Material},
    };
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;

    fn small_config(width: u32) -> CameraConfig {
        CameraConfig {
            image_width: width,
            samples_per_pixel: 4,
            max_depth: 8,
            ..CameraConfig::default()
        }
    }

    fn one_sphere_scene(material: Material) -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -3.0), 1.0, Arc::new(material)));
        scene
    }

    #[derive(Default)]
    struct CollectingSink {
        frames: Vec<Image>,
    }

    impl ImageSink for CollectingSink {
        fn write(&mut self, image: &Image) -> Result<(), OutputError> {
            self.frames.push(image.clone());
            Ok(())
        }
    }

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_abs_diff_eq!(config.aspect_ratio, 1.0);
        assert_eq!(config.image_width, 900);
        assert_eq!(config.samples_per_pixel, 10);
        assert_eq!(config.max_depth, 50);
        assert_abs_diff_eq!(config.vertical_fov, 90.0);
        assert_abs_diff_eq!(config.defocus_angle, 0.0);
        assert_abs_diff_eq!(config.focus_distance, 10.0);
    }

    #[test]
    fn test_invalid_configs_fail_fast() {
        let bad = |config: CameraConfig| Camera::new(config).unwrap_err();
        assert_eq!(
            bad(CameraConfig {
                image_width: 0,
                ..CameraConfig::default()
            }),
            ConfigError::ImageWidth
        );
        assert_eq!(
            bad(CameraConfig {
                samples_per_pixel: 0,
                ..CameraConfig::default()
            }),
            ConfigError::SamplesPerPixel
        );
        assert_eq!(
            bad(CameraConfig {
                aspect_ratio: -1.0,
                ..CameraConfig::default()
            }),
            ConfigError::AspectRatio(-1.0)
        );
        assert_eq!(
            bad(CameraConfig {
                focus_distance: 0.0,
                ..CameraConfig::default()
            }),
            ConfigError::FocusDistance(0.0)
        );
        assert_eq!(
            bad(CameraConfig {
                lookat: Vec3::ZERO,
                ..CameraConfig::default()
            }),
            ConfigError::DegenerateView
        );
        assert_eq!(
            bad(CameraConfig {
                lookat: Vec3::new(0.0, -5.0, 0.0),
                ..CameraConfig::default()
            }),
            ConfigError::DegenerateView
        );
    }

    #[test]
    fn test_zero_depth_is_allowed() {
        assert!(Camera::new(CameraConfig {
            max_depth: 0,
            ..CameraConfig::default()
        })
        .is_ok());
    }

    #[test]
    fn test_image_height_from_aspect_ratio() {
        let camera = Camera::new(CameraConfig {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            ..CameraConfig::default()
        })
        .unwrap();
        assert_eq!(camera.image_height(), 225);

        let thin = Camera::new(CameraConfig {
            image_width: 1,
            aspect_ratio: 16.0 / 9.0,
            ..CameraConfig::default()
        })
        .unwrap();
        assert_eq!(thin.image_height(), 1);
    }

    #[test]
    fn test_viewport_geometry() {
        // 90 degree fov at focus distance 10 gives a 20x20 viewport
        let camera = Camera::new(small_config(2)).unwrap();
        let expected_du = Vec3::new(10.0, 0.0, 0.0);
        let expected_dv = Vec3::new(0.0, -10.0, 0.0);
        let expected_p00 = Vec3::new(-5.0, 5.0, -10.0);
        for i in 0..3 {
            assert_abs_diff_eq!(camera.pixel_du[i], expected_du[i], epsilon = 1e-9);
            assert_abs_diff_eq!(camera.pixel_dv[i], expected_dv[i], epsilon = 1e-9);
            assert_abs_diff_eq!(camera.pixel00_loc[i], expected_p00[i], epsilon = 1e-9);
        }
        assert_abs_diff_eq!(camera.sample_scale, 0.25);
    }

    #[test]
    fn test_get_ray_stays_within_pixel() {
        let mut rng = StdRng::seed_from_u64(31);
        let camera = Camera::new(small_config(3)).unwrap();
        let half_pixel = 20.0 / 3.0 / 2.0;
        for _ in 0..500 {
            let ray = camera.get_ray(1, 1, &mut rng);
            assert_eq!(ray.origin, camera.center());
            assert_abs_diff_eq!(ray.direction.z, -10.0, epsilon = 1e-9);
            assert!(ray.direction.x.abs() <= half_pixel + 1e-9);
            assert!(ray.direction.y.abs() <= half_pixel + 1e-9);
        }
    }

    #[test]
    fn test_defocus_origins_lie_on_lens_disk() {
        let mut rng = StdRng::seed_from_u64(32);
        let camera = Camera::new(CameraConfig {
            defocus_angle: 10.0,
            lookfrom: Vec3::new(-2.0, 2.0, 1.0),
            lookat: Vec3::new(0.0, 0.0, -1.0),
            focus_distance: 3.4,
            ..small_config(8)
        })
        .unwrap();
        let radius = 3.4 * (5.0 as Float).to_radians().tan();
        let w = Vec3::new(-2.0, 2.0, 2.0).normalized();
        let mut max_offset: Float = 0.0;
        for _ in 0..2000 {
            let ray = camera.get_ray(4, 4, &mut rng);
            let offset = ray.origin - camera.center();
            assert_abs_diff_eq!(offset.dot(w), 0.0, epsilon = 1e-9);
            assert!(offset.length() <= radius + 1e-9);
            max_offset = max_offset.max(offset.length());
        }
        assert!(max_offset > radius * 0.5);
    }

    #[test]
    fn test_sky_gradient() {
        let down = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(sky_color(&down), Color::new(1.0, 1.0, 1.0));
        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(sky_color(&up), Color::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_ray_color_miss_returns_background() {
        let mut rng = StdRng::seed_from_u64(33);
        let scene = Scene::new();
        let up = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ray_color(&up, &scene, 50, &mut rng), Color::new(0.5, 0.7, 1.0));
    }

    #[test]
    fn test_ray_color_zero_depth_is_black() {
        let mut rng = StdRng::seed_from_u64(34);
        let scene = one_sphere_scene(Lambertian::new(Color::ONE).into());
        for direction in [Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 0.0)] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(ray_color(&ray, &scene, 0, &mut rng), Color::ZERO);
            assert_eq!(ray_color(&ray, &Scene::new(), 0, &mut rng), Color::ZERO);
        }
    }

    #[test]
    fn test_ray_color_black_body_absorbs() {
        let mut rng = StdRng::seed_from_u64(35);
        let scene = one_sphere_scene(Lambertian::new(Color::ZERO).into());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(&ray, &scene, 50, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_ray_color_through_glass_stays_in_sky_range() {
        let mut rng = StdRng::seed_from_u64(36);
        let scene = one_sphere_scene(Dielectric::new(1.5).into());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.1, 0.2, -1.0));
        for _ in 0..200 {
            let color = ray_color(&ray, &scene, 50, &mut rng);
            assert!((0.5 - 1e-9..=1.0 + 1e-9).contains(&color.x));
            assert_abs_diff_eq!(color.z, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_render_empty_scene_is_sky() {
        let camera = Camera::new(small_config(6)).unwrap();
        let image = camera.render(&Scene::new());
        assert_eq!((image.width(), image.height()), (6, 6));
        for (_, _, color) in image.enumerate_pixels() {
            assert_abs_diff_eq!(color.z, 1.0, epsilon = 1e-9);
            assert!(color.x >= 0.5 && color.x <= 1.0);
        }
        // Looking up the frame the sky gets bluer, so red drops
        assert!(image.get(3, 0).x < image.get(3, 5).x);
    }

    #[test]
    fn test_render_zero_depth_is_black() {
        let camera = Camera::new(CameraConfig {
            max_depth: 0,
            ..small_config(4)
        })
        .unwrap();
        let image = camera.render(&Scene::new());
        assert!(image.pixels().iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_render_is_reproducible_for_a_seed() {
        let camera = Camera::new(small_config(8)).unwrap();
        let scene = one_sphere_scene(Lambertian::new(Color::new(0.5, 0.3, 0.2)).into());
        let control = RenderControl {
            seed: 42,
            ..RenderControl::default()
        };
        let first = camera.render_with(&scene, &control, None);
        let shuffled = camera.render_with(
            &scene,
            &RenderControl {
                shuffle: true,
                ..control.clone()
            },
            None,
        );
        assert!(!first.stopped);
        assert_eq!(first.pixels_rendered, 64);
        assert_eq!(first.image, shuffled.image);

        let other_seed = camera.render_with(
            &scene,
            &RenderControl {
                seed: 43,
                ..control
            },
            None,
        );
        assert_ne!(first.image, other_seed.image);
    }

    #[test]
    fn test_stop_signal_skips_remaining_pixels() {
        let camera = Camera::new(small_config(4)).unwrap();
        let control = RenderControl::default();
        control.stop.store(true, Ordering::Relaxed);
        let output = camera.render_with(&Scene::new(), &control, None);
        assert!(output.stopped);
        assert_eq!(output.pixels_rendered, 0);
        assert!(output.image.pixels().iter().all(|c| *c == Color::ONE));
    }

    #[test]
    fn test_snapshots_are_taken_at_interval() {
        let camera = Camera::new(small_config(4)).unwrap();
        let sink = Mutex::new(CollectingSink::default());
        let control = RenderControl {
            snapshot_every: Some(4),
            ..RenderControl::default()
        };
        let output = camera.render_with(&Scene::new(), &control, Some(&sink));
        assert_eq!(output.pixels_rendered, 16);

        let frames = sink.into_inner().unwrap().frames;
        // After 4, 8 and 12 pixels; the finished image is not a snapshot
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| (f.width(), f.height()) == (4, 4)));
    }

    #[test]
    fn test_snapshot_frames_only_gain_pixels() {
        let camera = Camera::new(small_config(24)).unwrap();
        let sink = Mutex::new(CollectingSink::default());
        let control = RenderControl {
            shuffle: true,
            snapshot_every: Some(1),
            ..RenderControl::default()
        };
        camera.render_with(&Scene::new(), &control, Some(&sink));

        let frames = sink.into_inner().unwrap().frames;
        assert_eq!(frames.len(), 24 * 24 - 1);
        // Sky is never pure white, so white marks a pixel not rendered yet
        let rendered: Vec<usize> = frames
            .iter()
            .map(|f| f.pixels().iter().filter(|c| **c != Color::ONE).count())
            .collect();
        for (index, pair) in rendered.windows(2).enumerate() {
            assert!(
                pair[0] <= pair[1],
                "frame {} went from {} to {} pixels",
                index + 1,
                pair[0],
                pair[1]
            );
        }
        for (index, count) in rendered.iter().enumerate() {
            assert!(*count > index);
        }
    }

    #[test]
    fn test_setup_rng_is_apart_from_pixel_streams() {
        let camera = Camera::new(small_config(4)).unwrap();
        let first: Vec<u64> = {
            let mut rng = setup_rng(42);
            (0..4).map(|_| rng.next_u64()).collect()
        };
        let again: Vec<u64> = {
            let mut rng = setup_rng(42);
            (0..4).map(|_| rng.next_u64()).collect()
        };
        assert_eq!(first, again);
        for (x, y) in [(0, 0), (3, 3)] {
            let mut pixel = camera.pixel_rng(42, x, y);
            let pixel_draws: Vec<u64> = (0..4).map(|_| pixel.next_u64()).collect();
            assert_ne!(first, pixel_draws);
        }
    }
}
