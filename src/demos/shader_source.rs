// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! GLSL ES 1.00 sources used by the demos.

use crate::program::ShaderSource;

/// Red fragment, shared by the single-color demos
const FS_RED: &str = r#"
    void main() {
        gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
    }
"#;

const VS_FIXED_POINT: &str = r#"
    void main() {
        gl_Position = vec4(0.0, 0.0, 0.0, 1.0);
        gl_PointSize = 10.0;
    }
"#;

const VS_SIZED_POINT: &str = r#"
    attribute vec4 a_Position;
    attribute float a_PointSize;

    void main() {
        gl_Position = a_Position;
        gl_PointSize = a_PointSize;
    }
"#;

const VS_POSITIONED_POINT: &str = r#"
    attribute vec4 a_Position;

    void main() {
        gl_Position = a_Position;
        gl_PointSize = 10.0;
    }
"#;

const FS_UNIFORM_COLOR: &str = r#"
    precision mediump float;
    uniform vec4 u_FragColor;

    void main() {
        gl_FragColor = u_FragColor;
    }
"#;

const VS_TRANSLATED: &str = r#"
    attribute vec4 a_Position;
    uniform vec4 u_Translation;

    void main() {
        gl_Position = a_Position + u_Translation;
        gl_PointSize = 2.0;
    }
"#;

const VS_PULSE: &str = r#"
    attribute vec4 coords;
    attribute float pointSize;

    void main(void) {
        gl_Position = coords;
        gl_PointSize = pointSize;
    }
"#;

const FS_PULSE: &str = r#"
    precision mediump float;
    uniform vec4 color;

    void main(void) {
        gl_FragColor = color;
    }
"#;

pub const HELLO_POINT1: ShaderSource<'static> = ShaderSource::new(VS_FIXED_POINT, FS_RED);
pub const HELLO_POINT2: ShaderSource<'static> = ShaderSource::new(VS_SIZED_POINT, FS_RED);
pub const CLICKED_POINTS: ShaderSource<'static> = ShaderSource::new(VS_POSITIONED_POINT, FS_RED);
pub const COLORED_POINTS: ShaderSource<'static> =
    ShaderSource::new(VS_POSITIONED_POINT, FS_UNIFORM_COLOR);
pub const TRANSLATED_TRIANGLE: ShaderSource<'static> = ShaderSource::new(VS_TRANSLATED, FS_RED);
pub const PULSE: ShaderSource<'static> = ShaderSource::new(VS_PULSE, FS_PULSE);
