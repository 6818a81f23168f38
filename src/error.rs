use std::io;

use quick_error::quick_error;

quick_error! {
    #[derive(Debug)]
    pub enum MazeError {
        InvalidDimensions(rows: usize, cols: usize) {
            display("maze needs at least one row and one column, got {rows}x{cols}")
        }
        InvalidSetting(name: String, value: String) {
            display("invalid value for {name}: {value:?}")
        }
        Io(err: io::Error) {
            from()
            display("{}", err)
        }
    }
}
