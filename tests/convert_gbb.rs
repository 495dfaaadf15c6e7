use gbb_texture_tool::{
    check_roundtrip, decode, encode, export_gbb_to_ppm, read_texture_info, replace_texture,
    session::backup_path, Arguments, CLIParser, Error,
};
use std::fs;
use std::path::PathBuf;

const TEXTURE_FILE_NAME: &str = "wall.GBB";
const REPLACEMENT_FILE_NAME: &str = "replacement.ppm";

#[rustfmt::skip]
const TEXTURE: &[u8] = &[
    0x03, 0x00, 0x02, 0x00, 0x18, 0x00, 0x00, 0x00,
    // blue plane: six times 0x10
    0x03, 0x10,
    // green plane
    0xFA, 0, 50, 100, 150, 200, 250,
    // red plane: five times 0xFF, then 0x00
    0x02, 0xFF, 0xFF, 0x00,
];

const REPLACEMENT: &str = "P3\n3 2\n255\n1 2 3  4 5 6  7 8 9\n10 11 12  13 14 15  16 17 18\n";

fn get_test_directory(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    path.push(format!("convert_gbb_{}", name));
    path
}

fn setup(name: &str) -> PathBuf {
    let directory = get_test_directory(name);
    if directory.exists() {
        fs::remove_dir_all(&directory).expect("Deletion of test directory failed");
    }
    fs::create_dir_all(&directory).expect("Creation of test directory failed");
    fs::write(directory.join(TEXTURE_FILE_NAME), TEXTURE).expect("Writing of texture failed");
    directory
}

#[test]
fn test_decode_texture() {
    let (header, image) = decode(TEXTURE).expect("Decoding failed");
    assert_eq!((header.width, header.height, header.bits_per_pixel), (3, 2, 24));
    let pixels: Vec<[u8; 3]> = image.pixels().iter().map(|&p| p.into()).collect();
    assert_eq!(
        pixels,
        vec![
            [0xFF, 0, 0x10],
            [0xFF, 50, 0x10],
            [0xFF, 100, 0x10],
            [0xFF, 150, 0x10],
            [0xFF, 200, 0x10],
            [0x00, 250, 0x10],
        ]
    );
    let (_, reencoded) = decode(&encode(&image)).expect("Decoding of re-encoded texture failed");
    assert_eq!(reencoded, image);
}

#[test]
fn test_texture_info() {
    let directory = setup("info");
    let info = read_texture_info(&directory.join(TEXTURE_FILE_NAME)).expect("Reading info failed");
    assert_eq!(info.container_length, TEXTURE.len());
    assert_eq!(info.statistics.run_records, 2);
    assert_eq!(info.statistics.literal_records, 2);
    assert_eq!(info.statistics.expanded_length(), 18);
    assert!(check_roundtrip(&directory.join(TEXTURE_FILE_NAME)).expect("Roundtrip failed"));
}

#[test]
fn test_export_texture_to_ppm() {
    let directory = setup("export");
    let output_directory = directory.join("out");
    fs::create_dir_all(&output_directory).expect("Creation of output directory failed");
    let mut cli_parser = CLIParser::new();
    let input_file = directory.join(TEXTURE_FILE_NAME);
    let arguments = cli_parser.parse(vec![
        "test",
        "export",
        input_file.to_str().unwrap(),
        "-o",
        output_directory.to_str().unwrap(),
        "-t",
        "2",
    ]);
    let outcomes = match arguments {
        Arguments::Export {
            input_files,
            output_directory,
            number_of_threads,
        } => export_gbb_to_ppm(&input_files, output_directory.as_deref(), number_of_threads),
        _ => panic!("Export command not recognized"),
    };
    let result_image_path = outcomes[0].result.as_ref().expect("Export failed");
    assert_eq!(result_image_path, &output_directory.join("wall.ppm"));
    let exported = fs::read_to_string(result_image_path).expect("Output file was not created");
    assert!(exported.starts_with("P3\n3 2\n255\n255 0 16  255 50 16"));
}

#[test]
fn test_replace_texture_keeps_first_backup() {
    let directory = setup("replace");
    let texture_path = directory.join(TEXTURE_FILE_NAME);
    let replacement_path = directory.join(REPLACEMENT_FILE_NAME);
    fs::write(&replacement_path, REPLACEMENT).expect("Writing of replacement failed");

    assert!(replace_texture(&texture_path, &replacement_path).expect("Replacement failed"));
    assert_eq!(fs::read(backup_path(&texture_path)).unwrap(), TEXTURE);

    let (_, replaced) = decode(&fs::read(&texture_path).unwrap()).expect("Decoding failed");
    let pixels: Vec<[u8; 3]> = replaced.pixels().iter().map(|&p| p.into()).collect();
    assert_eq!(pixels[0], [1, 2, 3]);
    assert_eq!(pixels[5], [16, 17, 18]);

    // a second save in a new session must not touch the pristine backup
    assert!(!replace_texture(&texture_path, &replacement_path).expect("Replacement failed"));
    assert_eq!(fs::read(backup_path(&texture_path)).unwrap(), TEXTURE);
}

#[test]
fn test_replace_with_wrong_dimensions_leaves_texture_alone() {
    let directory = setup("wrong_dimensions");
    let texture_path = directory.join(TEXTURE_FILE_NAME);
    let replacement_path = directory.join(REPLACEMENT_FILE_NAME);
    fs::write(&replacement_path, "P3 1 1 255 0 0 0").expect("Writing of replacement failed");

    match replace_texture(&texture_path, &replacement_path) {
        Err(Error::DimensionMismatch { expected, actual }) => {
            assert_eq!(expected, (3, 2));
            assert_eq!(actual, (1, 1));
        }
        _ => panic!("Dimension mismatch not detected"),
    }
    assert_eq!(fs::read(&texture_path).unwrap(), TEXTURE);
    assert!(!backup_path(&texture_path).exists());
}
