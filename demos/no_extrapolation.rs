extern crate piecewise_linear;

use piecewise_linear::{LinearInterpolator, SampleSet};

fn main() {

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = vec![1.0, 0.0, -2.0, 1.0, 1.0];

    let samples = SampleSet::from_slices(&x, &y).unwrap();
    let interpolator = LinearInterpolator::new(samples);

    // queries outside [1, 5] print the 0 sentinel instead of extrapolating
    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let xq = x_min + step * i as f64;
        println!("{:.2};{:.2}", xq, interpolator.evaluate(xq));
    }
}
