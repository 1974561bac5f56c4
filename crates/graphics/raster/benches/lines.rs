use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math::{Bitmap, Color, Point};
use raster::{draw_line, Algorithm};

const WIDTH: i32 = 800;
const HEIGHT: i32 = 600;

fn criterion_benchmark(c: &mut Criterion) {
    // A fan of lines through the center of the canvas, covering every octant
    let center = Point::new(WIDTH / 2, HEIGHT / 2);
    let endpoints: Vec<Point> = (0..WIDTH)
        .step_by(8)
        .flat_map(|x| [Point::new(x, 0), Point::new(x, HEIGHT - 1)])
        .chain(
            (0..HEIGHT)
                .step_by(8)
                .flat_map(|y| [Point::new(0, y), Point::new(WIDTH - 1, y)]),
        )
        .collect();

    for algorithm in Algorithm::ALL {
        let mut bitmap: Bitmap<Color> = Bitmap::new(WIDTH as usize, HEIGHT as usize);

        c.bench_function(&format!("{algorithm} fan 800x600"), |b| {
            b.iter(|| {
                for &endpoint in &endpoints {
                    draw_line(
                        &mut bitmap,
                        algorithm,
                        black_box(center),
                        black_box(endpoint),
                        Color::WHITE,
                    );
                }
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
