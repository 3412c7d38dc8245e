//! Walkthrough of the transform toolkit: build model and camera matrices,
//! rotate a vector both ways, and blend between two orientations.

use versor::transform::{
    projection_matrix, rotate_vector, rotate_vector_axis_angle, slerp, transformation_matrix,
};
use versor::{Matrix, Quaternion, Space, Vector3};

fn main() {
    println!("=== Model transform ===");
    let model = transformation_matrix(
        &Vector3::from([4.0_f32, 0.0, -2.0]),
        0.0,
        45.0,
        0.0,
        1.5,
        Space::Local,
    );
    println!("{}", model);

    println!("=== Perspective projection (16:9, 70 deg fov) ===");
    let projection = projection_matrix(16.0_f32 / 9.0, 70.0, 0.1, 500.0);
    println!("{}", projection);

    println!("=== Rotating (1, 0, 0) about Z ===");
    let v = Vector3::from([1.0_f32, 0.0, 0.0]);
    let axis = Vector3::from([0.0_f32, 0.0, 1.0]);
    for angle in [0.0_f32, 30.0, 60.0, 90.0] {
        let rotated = rotate_vector_axis_angle(&v, &axis, angle);
        print!("{:>5} deg -> {}", angle, rotated);
    }

    println!("=== Blending two orientations ===");
    let start = Quaternion::from_axis_angle(axis, 0.0);
    let end = Quaternion::from_axis_angle(axis, 90.0);
    for step in 0..=4 {
        let t = step as f32 / 4.0;
        let sample = slerp(start, end, t);
        println!("t = {:.2}: {}", t, sample);
    }

    println!("=== Homogeneous point through the model matrix ===");
    let point = Matrix::<1, 4, f32>::from_values(&[1.0, 1.0, 1.0, 1.0]).unwrap();
    println!("{}", point * model);

    let q = Quaternion::from_axis_angle(Vector3::from([0.0_f32, 1.0, 0.0]), 45.0);
    let spun = rotate_vector(&v, &q);
    println!("=== (1, 0, 0) spun 45 deg about Y ===");
    print!("{}", spun);
}
