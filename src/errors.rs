use image;
use std::io;

error_chain! {
    foreign_links {
        Io(io::Error);
        Image(image::ImageError);
    }

    errors {
        Usage {
            description("wrong number of arguments")
            display("expected an input image and four output paths")
        }
        InvalidKernelSize(choice: String) {
            description("unsupported Prewitt operator size")
            display("unsupported Prewitt operator size '{}', choose 1 (3x3) or 2 (5x5)", choice)
        }
        InvalidRadius(input: String) {
            description("invalid surrounding radius")
            display("invalid surrounding radius '{}', expected a non-negative integer", input)
        }
        DimensionMismatch(left: (usize, usize), right: (usize, usize)) {
            description("buffers have different dimensions")
            display("cannot compare a {}x{} buffer with a {}x{} buffer", left.0, left.1, right.0, right.1)
        }
    }
}
