// Tests whole scenes: parsing, laying out, and exporting
use vecdraw::io::*;
use vecdraw::*;

fn read(file: &str) -> String {
    std::fs::read_to_string(std::path::Path::new("test").join(file)).unwrap()
}

fn same(p1: Point2, p2: Point2) -> bool {
    p1.sub(p2).mag() < 1e-11
}

fn temp(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    let _ = std::fs::remove_file(&path);
    path
}

fn texts<V: View>(fig: &Figure<V>, layer: Layer) -> Vec<(String, V::Pos)> {
    fig.layer(layer)
        .filter_map(|s| match s {
            Shape::Text { at, text, .. } => Some((text.clone(), *at)),
            _ => None,
        })
        .collect()
}

// 'triangle.scene' holds:
// - three labelled points of a 3-4-5 triangle
// - the dashed hypotenuse
// - the two legs as arrows
#[test]
fn triangle_2d() {
    let scene = parse_scene_2d(&read("triangle.scene")).unwrap();
    assert_eq!(scene.len(), 4);

    let path = temp("vecdraw-triangle.svg");
    let cfg = Draw2Config {
        origin: true,
        save_as: Some(path.clone()),
        ..Default::default()
    };
    let fig = draw_2d(&scene, &cfg).unwrap();

    let v = fig.view().viewport;
    assert_eq!(v.min(), [-1.0, -1.0]);
    assert_eq!(v.max(), [4.0, 5.0]);
    assert_eq!(fig.size(), [600.0, 720.0]);

    assert_eq!(fig.layer(Layer::Points).count(), 3);
    assert_eq!(fig.layer(Layer::Lines).count(), 1);
    // two shafts, two heads, the origin
    assert_eq!(fig.layer(Layer::Arrows).count(), 5);

    let labels = texts(&fig, Layer::Labels);
    let names = labels.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["O", "A", "B", "hypotenuse", "a", "b"]);
    assert!(same(labels[3].1, [1.5 - 0.16, 2.0 + 0.12]));
    assert!(same(labels[4].1, [1.5, 0.2]));
    assert!(same(labels[5].1, [2.8, 2.0]));

    let doc = std::fs::read_to_string(&path).unwrap();
    assert_eq!(doc, fig.to_svg().document());
    assert_eq!(doc.matches("<circle").count(), 3);
    assert_eq!(doc.matches("<polygon").count(), 2);
    assert!(doc.contains("stroke-dasharray"));
    assert!(doc.contains(">hypotenuse</text>"));

    let _ = std::fs::remove_file(&path);
}

// 'basis.scene' holds the three basis vectors, their sum with a coarser head, a dotted
// drop line, and a labelled point at the sum
#[test]
fn basis_3d() {
    let scene = parse_scene_3d(&read("basis.scene")).unwrap();
    assert_eq!(scene.len(), 6);

    let fig = draw_3d(&scene, &Draw3Config::default()).unwrap();

    // the axis arrow cones reach 0.08 below zero, then 10% of the 1.08 extent pads each side
    let v = fig.view().viewport;
    assert!(v.min().into_iter().all(|x| (x + 0.188).abs() < 1e-12));
    assert!(v.max().into_iter().all(|x| (x - 1.108).abs() < 1e-12));
    assert_eq!(fig.size(), [600.0, 600.0]);

    // 4 shafts, 3 cones of 24 faces, one of 12
    assert_eq!(fig.layer(Layer::Arrows).count(), 4 + 3 * 24 + 12);
    assert_eq!(fig.layer(Layer::Points).count(), 1);
    assert_eq!(
        texts(&fig, Layer::Labels)
            .into_iter()
            .map(|(t, _)| t)
            .collect::<Vec<_>>(),
        vec!["v".to_string()]
    );

    // default 3D config has no pane grid but does have tick labels
    let ticks = texts(&fig, Layer::Grid);
    assert_eq!(ticks.len(), 3 * 2);
    assert!(ticks.iter().all(|(t, _)| t == "0" || t == "1"));

    let buf = scene_to_dxf(&scene).unwrap();
    let d = ::dxf::Drawing::load(&mut std::io::Cursor::new(buf)).unwrap();
    let (mut polylines, mut faces) = (0, 0);
    for e in d.entities() {
        match e.specific {
            ::dxf::entities::EntityType::Polyline(_) => polylines += 1,
            ::dxf::entities::EntityType::Face3D(_) => faces += 1,
            _ => (),
        }
    }
    assert_eq!(polylines, 5);
    assert_eq!(faces, 3 * 24 + 12);
}

#[test]
fn repeated_draws_are_identical() {
    let scene = parse_scene_2d(&read("triangle.scene")).unwrap();
    let cfg = Draw2Config::default();
    let a = draw_2d(&scene, &cfg).unwrap().to_svg().document();
    let b = draw_2d(&scene, &cfg).unwrap().to_svg().document();
    assert_eq!(a, b);

    let scene = parse_scene_3d(&read("basis.scene")).unwrap();
    let cfg = Draw3Config {
        grid: true,
        dark_mode: false,
        ..Default::default()
    };
    let a = draw_3d(&scene, &cfg).unwrap().to_svg().document();
    let b = draw_3d(&scene, &cfg).unwrap().to_svg().document();
    assert_eq!(a, b);
}

#[test]
fn unrecognized_primitive() {
    let text = "point 1 2\npolygon (0,0) (1,0) (1,1)\n";
    match parse_scene_2d(text) {
        Err(Error::UnrecognizedPrimitive { line, kind }) => {
            assert_eq!(line, 2);
            assert_eq!(kind, "polygon");
        }
        x => panic!("expecting an unrecognized primitive, got {:?}", x),
    }
}

#[test]
fn failed_draw_writes_nothing() {
    let path = temp("vecdraw-failed.svg");
    let scene = parse_scene_3d("point 1 1 1\narrow (2,2,2) (2,2,2)").unwrap();
    let cfg = Draw3Config {
        save_as: Some(path.clone()),
        ..Default::default()
    };
    assert!(matches!(draw_3d(&scene, &cfg), Err(Error::ZeroLengthArrow)));
    assert!(!path.exists());
}
