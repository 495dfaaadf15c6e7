use std::time::{Duration, Instant};

use gbb_texture_tool::color::Rgb;
use gbb_texture_tool::gbb::{compress, decompress, pixels_to_planar};
use gbb_texture_tool::PixelBuffer;

const IMAGE_WIDTH: u16 = 2048;
const IMAGE_HEIGHT: u16 = 2048;
const IMAGE_SIZE: usize = IMAGE_WIDTH as usize * IMAGE_HEIGHT as usize;

fn create_test_image() -> PixelBuffer {
    let pixels = (0..IMAGE_SIZE)
        .map(|index| {
            let x = index % IMAGE_WIDTH as usize;
            let y = index / IMAGE_WIDTH as usize;
            // flat bands alternating with noisy stripes
            let band = ((y / 16) % 4) as u8 * 60;
            let noise = ((x * 31 + y * 17) % 7) as u8;
            Rgb::new(band, band.wrapping_add(noise), (x / 64) as u8)
        })
        .collect();
    PixelBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT, pixels).expect("Test image dimensions are valid")
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

fn print_summary(name: &str, durations: &[Duration]) {
    let min_duration = durations.iter().min().copied().unwrap_or_default();
    let max_duration = durations.iter().max().copied().unwrap_or_default();
    let avg_duration = durations.iter().sum::<Duration>() / NUMBER_OF_ROUNDS;
    let std_deviation = calculate_std_deviation_in_micros(&avg_duration, durations);

    println!(
        "{}: Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        name,
        min_duration.as_micros(),
        max_duration.as_micros(),
        avg_duration.as_micros(),
        std_deviation,
    );
}

const NUMBER_OF_ROUNDS: u32 = 10;

fn main() {
    println!("Creating test image");
    let test_image = create_test_image();
    let planes = pixels_to_planar(&test_image);
    let mut compress_durations: Vec<Duration> = Vec::new();
    let mut decompress_durations: Vec<Duration> = Vec::new();

    for round in 1..=NUMBER_OF_ROUNDS {
        println!("Starting round {}", round);

        let start = Instant::now();
        let stream = compress(&planes);
        compress_durations.push(start.elapsed());

        let start = Instant::now();
        let expanded = decompress(&stream, planes.len());
        decompress_durations.push(start.elapsed());

        match expanded {
            Ok(expanded) if expanded == planes => println!(
                "Finished round {}, {} planar bytes in {} stream bytes",
                round,
                planes.len(),
                stream.len()
            ),
            _ => {
                eprintln!("Round {} did not reproduce the planes", round);
                return;
            }
        }
    }

    print_summary("compress", &compress_durations);
    print_summary("decompress", &decompress_durations);
}
