use std::path::PathBuf;
use std::process::Command;

use glsr::ppm::load_ppm;
use glsr::{save_scene, Color, Primitive, Scene, Vec2};

fn exe() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_glsr"))
}

fn work_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("cli_smoke").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn cli_render_writes_ppm() {
    let dir = work_dir("render");
    let scene_path = dir.join("scene.ron");
    let out_path = dir.join("out.ppm");
    let _ = std::fs::remove_file(&out_path);

    let mut scene = Scene::new(12, 8);
    scene.primitives.push(Primitive::triangle(
        Vec2::new(0.0, 0.0),
        Vec2::new(11.0, 0.0),
        Vec2::new(0.0, 7.0),
        Color::RED,
    ));
    scene.primitives.push(Primitive::line(
        Vec2::new(0.0, 7.0),
        Vec2::new(11.0, 7.0),
        Color::WHITE,
    ));
    save_scene(&scene, &scene_path).unwrap();

    let status = Command::new(exe())
        .arg("render")
        .arg(&scene_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let fb = load_ppm(&out_path).unwrap();
    assert_eq!((fb.width(), fb.height()), (12, 8));
    assert_eq!(fb.get_pixel(1, 1), Some(Color::RED));
    assert_eq!(fb.get_pixel(11, 7), Some(Color::WHITE));
    assert_eq!(fb.get_pixel(11, 6), Some(Color::BLACK));
}

#[test]
fn cli_wireframe_override_leaves_interior_empty() {
    let dir = work_dir("wireframe");
    let out_path = dir.join("demo.ppm");
    let _ = std::fs::remove_file(&out_path);

    let status = Command::new(exe())
        .args(["demo", "--mode", "wireframe", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let filled = Scene::demo().render().unwrap();
    let wire = load_ppm(&out_path).unwrap();
    let red = Color::new(255, 0, 0);
    assert!(wire.count_color(red) > 0);
    assert!(wire.count_color(red) < filled.count_color(red));
}

#[test]
fn cli_darken_subtracts_amount() {
    let dir = work_dir("darken");
    let in_path = dir.join("in.ppm");
    let out_path = dir.join("out.ppm");
    std::fs::write(&in_path, "P3\n2 1\n255\n100 60 20 255 255 255 \n").unwrap();

    let status = Command::new(exe())
        .arg("darken")
        .arg(&in_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());

    let fb = load_ppm(&out_path).unwrap();
    assert_eq!(fb.get_pixel(0, 0), Some(Color::new(50, 10, 0)));
    assert_eq!(fb.get_pixel(1, 0), Some(Color::new(205, 205, 205)));
}

#[test]
fn cli_rejects_missing_scene() {
    let dir = work_dir("missing");
    let status = Command::new(exe())
        .arg("render")
        .arg(dir.join("does_not_exist.ron"))
        .arg("--out")
        .arg(dir.join("out.ppm"))
        .status()
        .unwrap();
    assert!(!status.success());
}
