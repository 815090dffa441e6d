use crate::{
    camera::{CameraConfig, Float},
    hittable::{Scene, Sphere},
    material::{Dielectric, Lambertian, Material, Metal},
    vec3::{Color, Point3, Vec3},
    vec3_ext::Vec3Ext,
};
use itertools::iproduct;
use rand::Rng;
use std::sync::Arc;

/// Camera for `cover_scene`, looking at the three big spheres over the field of small ones
pub fn cover_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 1200,
        samples_per_pixel: 500,
        max_depth: 50,
        vertical_fov: 20.0,
        lookfrom: Vec3::new(13.0, 2.0, 3.0),
        lookat: Vec3::ZERO,
        up: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: 0.6,
        focus_distance: 10.0,
    }
}

/// A huge ground sphere covered in a grid of small random spheres, plus one big
/// glass, one matte and one metal sphere in the middle.
pub fn cover_scene<R: Rng + ?Sized>(rng: &mut R) -> Scene {
    let mut scene = Scene::new();

    let ground: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into());
    scene.add(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground));

    // Shared by every small glass sphere
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());
    let keep_clear = Point3::new(4.0, 0.2, 0.0);
    let radius = 0.2;

    for (a, b) in iproduct!(-11..11, -11..11) {
        let choose: Float = rng.gen();
        let center = Point3::new(
            a as Float + 0.9 * rng.gen::<Float>(),
            radius,
            b as Float + 0.9 * rng.gen::<Float>(),
        );
        // Don't put it inside the big metal sphere
        if (center - keep_clear).length() <= 0.9 {
            continue;
        }

        let material: Arc<Material> = if choose < 0.8 {
            let albedo = Color::random(rng) * Color::random(rng);
            Arc::new(Lambertian::new(albedo).into())
        } else if choose < 0.95 {
            let albedo = Color::random_range(rng, 0.5, 1.0);
            let fuzz = rng.gen_range(0.0..0.5);
            Arc::new(Metal::new(albedo, fuzz).into())
        } else {
            glass.clone()
        };
        scene.add(Sphere::new(center, radius, material));
    }

    scene.add(Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, glass));
    let matte: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)).into());
    scene.add(Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, matte));
    let polished: Arc<Material> = Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into());
    scene.add(Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, polished));

    scene
}

/// Camera for `showcase_scene`, a shallow depth of field focused on the middle sphere
pub fn showcase_camera() -> CameraConfig {
    CameraConfig {
        aspect_ratio: 16.0 / 9.0,
        image_width: 900,
        samples_per_pixel: 100,
        max_depth: 50,
        vertical_fov: 20.0,
        lookfrom: Vec3::new(-2.0, 2.0, 1.0),
        lookat: Vec3::new(0.0, 0.0, -1.0),
        up: Vec3::new(0.0, 1.0, 0.0),
        defocus_angle: 10.0,
        focus_distance: 3.4,
    }
}

/// Five spheres: ground, a matte center, a hollow glass ball and fuzzy gold metal
pub fn showcase_scene() -> Scene {
    let ground: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)).into());
    let center: Arc<Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)).into());
    let left: Arc<Material> = Arc::new(Dielectric::new(1.5).into());
    // Air inside glass: the ratio of the indices, not the index itself
    let bubble: Arc<Material> = Arc::new(Dielectric::new(1.0 / 1.5).into());
    let right: Arc<Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 1.0).into());

    vec![
        Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0, ground),
        Sphere::new(Vec3::new(0.0, 0.0, -1.2), 0.5, center),
        Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.5, left),
        Sphere::new(Vec3::new(-1.0, 0.0, -1.0), 0.4, bubble),
        Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, right),
    ]
    .into_iter()
    .collect()
}
