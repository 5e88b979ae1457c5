extern crate piecewise_linear;

use piecewise_linear::{LinearInterpolator, SampleSet};

fn main() {

    let x = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 0.5, 1.0];

    let samples = SampleSet::from_slices(&x, &y).unwrap();
    let interpolator = LinearInterpolator::new(samples);

    let x_min = samples.min_x();
    let x_max = samples.max_x();
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let xq = x_min + step * i as f64;
        println!("{:.2};{:.2}", xq, interpolator.evaluate(xq));
    }
}
