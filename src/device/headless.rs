// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Headless Device
//!
//! An in-memory `GlDevice`. Every command is appended to a call log as a
//! [`GlCall`]; queries (compile/link status, locations) are answered from
//! a tiny GLSL front-end that:
//!
//! - rejects unbalanced `{}`, `()`, `[]` and a missing `void main()`;
//! - collects top-level `attribute`/`in`, `uniform` and `varying`/`out`
//!   declarations;
//! - at link time requires one compiled shader per stage and every
//!   fragment varying to be declared by the vertex stage.
//!
//! Attribute locations are handed out in declaration order. Clones share
//! the same state, which makes the device an "equivalent context" for
//! repeated surface resolution.

use super::{AttribConstant, GlDevice, ShaderStage, Topology, UniformValue};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadlessShader(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadlessProgram(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadlessBuffer(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadlessUniform {
    pub program: u32,
    pub index: u32,
}

/// One recorded device command
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    ClearColor([f32; 4]),
    Clear,
    CreateShader { shader: u32, stage: ShaderStage },
    ShaderSource { shader: u32 },
    CompileShader { shader: u32 },
    DeleteShader { shader: u32 },
    CreateProgram { program: u32 },
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram { program: u32 },
    DeleteProgram { program: u32 },
    UseProgram { program: Option<u32> },
    CreateBuffer { buffer: u32 },
    BufferData { buffer: u32, values: Vec<f32> },
    VertexAttribPointer { location: u32, size: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray { location: u32 },
    VertexAttrib { location: u32, value: AttribConstant },
    Uniform { name: String, value: UniformValue },
    DrawArrays { topology: Topology, first: i32, count: i32 },
}

impl fmt::Display for GlCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlCall::Viewport { x, y, width, height } => {
                write!(f, "viewport({}, {}, {}, {})", x, y, width, height)
            }
            GlCall::ClearColor(c) => {
                write!(f, "clearColor({}, {}, {}, {})", c[0], c[1], c[2], c[3])
            }
            GlCall::Clear => write!(f, "clear(COLOR_BUFFER_BIT)"),
            GlCall::CreateShader { shader, stage } => {
                write!(f, "createShader({}) -> #{}", stage, shader)
            }
            GlCall::ShaderSource { shader } => write!(f, "shaderSource(#{})", shader),
            GlCall::CompileShader { shader } => write!(f, "compileShader(#{})", shader),
            GlCall::DeleteShader { shader } => write!(f, "deleteShader(#{})", shader),
            GlCall::CreateProgram { program } => write!(f, "createProgram() -> #{}", program),
            GlCall::AttachShader { program, shader } => {
                write!(f, "attachShader(#{}, #{})", program, shader)
            }
            GlCall::DetachShader { program, shader } => {
                write!(f, "detachShader(#{}, #{})", program, shader)
            }
            GlCall::LinkProgram { program } => write!(f, "linkProgram(#{})", program),
            GlCall::DeleteProgram { program } => write!(f, "deleteProgram(#{})", program),
            GlCall::UseProgram { program: Some(p) } => write!(f, "useProgram(#{})", p),
            GlCall::UseProgram { program: None } => write!(f, "useProgram(null)"),
            GlCall::CreateBuffer { buffer } => write!(f, "createBuffer() -> #{}", buffer),
            GlCall::BufferData { buffer, values } => {
                write!(f, "bufferData(#{}, {:?}, STATIC_DRAW)", buffer, values)
            }
            GlCall::VertexAttribPointer { location, size, stride, offset } => write!(
                f,
                "vertexAttribPointer({}, {}, FLOAT, false, {}, {})",
                location, size, stride, offset
            ),
            GlCall::EnableVertexAttribArray { location } => {
                write!(f, "enableVertexAttribArray({})", location)
            }
            GlCall::VertexAttrib { location, value } => match value {
                AttribConstant::F1(x) => write!(f, "vertexAttrib1f({}, {})", location, x),
                AttribConstant::F2(v) => write!(f, "vertexAttrib2f({}, {:?})", location, v),
                AttribConstant::F3(v) => write!(f, "vertexAttrib3f({}, {:?})", location, v),
                AttribConstant::F4(v) => write!(f, "vertexAttrib4f({}, {:?})", location, v),
            },
            GlCall::Uniform { name, value } => match value {
                UniformValue::F1(x) => write!(f, "uniform1f({}, {})", name, x),
                UniformValue::F2(v) => write!(f, "uniform2f({}, {:?})", name, v),
                UniformValue::F4(v) => write!(f, "uniform4f({}, {:?})", name, v),
            },
            GlCall::DrawArrays { topology, first, count } => {
                write!(f, "drawArrays({}, {}, {})", topology, first, count)
            }
        }
    }
}

/// Declarations a shader exposes to the linker
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShaderInterface {
    pub attributes: Vec<String>,
    pub uniforms: Vec<String>,
    pub varyings: Vec<String>,
}

#[derive(Debug)]
struct ShaderObject {
    stage: ShaderStage,
    source: String,
    compiled: Option<Result<ShaderInterface, String>>,
}

#[derive(Debug, Default)]
struct ProgramObject {
    attached: Vec<u32>,
    linked: Option<Result<LinkedInterface, String>>,
}

#[derive(Debug, Clone, Default)]
struct LinkedInterface {
    attributes: Vec<String>,
    uniforms: Vec<String>,
}

#[derive(Debug, Default)]
struct HeadlessState {
    next_id: u32,
    shaders: HashMap<u32, ShaderObject>,
    programs: HashMap<u32, ProgramObject>,
    calls: Vec<GlCall>,
    current_program: Option<u32>,
    fail_allocations: bool,
}

impl HeadlessState {
    fn alloc_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn linked(&self, program: u32) -> Option<&LinkedInterface> {
        match self.programs.get(&program)?.linked.as_ref()? {
            Ok(li) => Some(li),
            Err(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessDevice {
    state: Rc<RefCell<HeadlessState>>,
}

impl HeadlessDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later create_* call fail, like a lost context would
    pub fn set_fail_allocations(&self, fail: bool) {
        self.state.borrow_mut().fail_allocations = fail;
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }

    pub fn current_program(&self) -> Option<u32> {
        self.state.borrow().current_program
    }

    /// (topology, first, count) of every recorded draw
    pub fn draws(&self) -> Vec<(Topology, i32, i32)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|c| match c {
                GlCall::DrawArrays { topology, first, count } => Some((*topology, *first, *count)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| matches!(c, GlCall::Clear))
            .count()
    }

    /// true when both handles drive the same recorded state
    pub fn same_device(&self, other: &HeadlessDevice) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl GlDevice for HeadlessDevice {
    type Shader = HeadlessShader;
    type Program = HeadlessProgram;
    type Buffer = HeadlessBuffer;
    type UniformLocation = HeadlessUniform;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport { x, y, width, height });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear(&self) {
        self.record(GlCall::Clear);
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let mut st = self.state.borrow_mut();
        if st.fail_allocations {
            return Err(format!("createShader({}) failed", stage));
        }
        let id = st.alloc_id();
        st.shaders.insert(
            id,
            ShaderObject {
                stage,
                source: String::new(),
                compiled: None,
            },
        );
        st.calls.push(GlCall::CreateShader { shader: id, stage });
        Ok(HeadlessShader(id))
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        let mut st = self.state.borrow_mut();
        if let Some(so) = st.shaders.get_mut(&shader.0) {
            so.source = source.to_string();
        }
        st.calls.push(GlCall::ShaderSource { shader: shader.0 });
    }

    fn compile_shader(&self, shader: Self::Shader) {
        let mut st = self.state.borrow_mut();
        if let Some(so) = st.shaders.get_mut(&shader.0) {
            so.compiled = Some(scan_glsl(so.stage, &so.source));
        }
        st.calls.push(GlCall::CompileShader { shader: shader.0 });
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        matches!(
            self.state.borrow().shaders.get(&shader.0).and_then(|so| so.compiled.as_ref()),
            Some(Ok(_))
        )
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        match self.state.borrow().shaders.get(&shader.0).and_then(|so| so.compiled.as_ref()) {
            Some(Err(log)) => log.clone(),
            _ => String::new(),
        }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        let mut st = self.state.borrow_mut();
        st.shaders.remove(&shader.0);
        st.calls.push(GlCall::DeleteShader { shader: shader.0 });
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        let mut st = self.state.borrow_mut();
        if st.fail_allocations {
            return Err("createProgram() failed".to_string());
        }
        let id = st.alloc_id();
        st.programs.insert(id, ProgramObject::default());
        st.calls.push(GlCall::CreateProgram { program: id });
        Ok(HeadlessProgram(id))
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        let mut st = self.state.borrow_mut();
        if let Some(po) = st.programs.get_mut(&program.0) {
            po.attached.push(shader.0);
        }
        st.calls.push(GlCall::AttachShader {
            program: program.0,
            shader: shader.0,
        });
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        let mut st = self.state.borrow_mut();
        if let Some(po) = st.programs.get_mut(&program.0) {
            po.attached.retain(|s| *s != shader.0);
        }
        st.calls.push(GlCall::DetachShader {
            program: program.0,
            shader: shader.0,
        });
    }

    fn link_program(&self, program: Self::Program) {
        let mut st = self.state.borrow_mut();
        let result = match st.programs.get(&program.0) {
            Some(po) => link_shaders(&st.shaders, &po.attached),
            None => Err("invalid program".to_string()),
        };
        if let Some(po) = st.programs.get_mut(&program.0) {
            po.linked = Some(result);
        }
        st.calls.push(GlCall::LinkProgram { program: program.0 });
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        self.state.borrow().linked(program.0).is_some()
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        match self.state.borrow().programs.get(&program.0).and_then(|p| p.linked.as_ref()) {
            Some(Err(log)) => log.clone(),
            _ => String::new(),
        }
    }

    fn delete_program(&self, program: Self::Program) {
        let mut st = self.state.borrow_mut();
        st.programs.remove(&program.0);
        if st.current_program == Some(program.0) {
            st.current_program = None;
        }
        st.calls.push(GlCall::DeleteProgram { program: program.0 });
    }

    fn use_program(&self, program: Option<Self::Program>) {
        let mut st = self.state.borrow_mut();
        st.current_program = program.map(|p| p.0);
        st.calls.push(GlCall::UseProgram {
            program: program.map(|p| p.0),
        });
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> i32 {
        self.state
            .borrow()
            .linked(program.0)
            .and_then(|li| li.attributes.iter().position(|a| a == name))
            .map(|idx| idx as i32)
            .unwrap_or(-1)
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        let st = self.state.borrow();
        let index = st.linked(program.0)?.uniforms.iter().position(|u| u == name)?;
        Some(HeadlessUniform {
            program: program.0,
            index: index as u32,
        })
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        let mut st = self.state.borrow_mut();
        if st.fail_allocations {
            return Err("createBuffer() failed".to_string());
        }
        let id = st.alloc_id();
        st.calls.push(GlCall::CreateBuffer { buffer: id });
        Ok(HeadlessBuffer(id))
    }

    fn array_buffer_data(&self, buffer: Self::Buffer, data: &[f32]) {
        self.record(GlCall::BufferData {
            buffer: buffer.0,
            values: data.to_vec(),
        });
    }

    fn vertex_attrib_pointer(&self, location: u32, size: i32, stride: i32, offset: i32) {
        self.record(GlCall::VertexAttribPointer {
            location,
            size,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(GlCall::EnableVertexAttribArray { location });
    }

    fn vertex_attrib(&self, location: u32, value: AttribConstant) {
        self.record(GlCall::VertexAttrib { location, value });
    }

    fn uniform(&self, location: &Self::UniformLocation, value: UniformValue) {
        let mut st = self.state.borrow_mut();
        let name = st
            .linked(location.program)
            .and_then(|li| li.uniforms.get(location.index as usize))
            .cloned()
            .unwrap_or_else(|| format!("#{}", location.index));
        st.calls.push(GlCall::Uniform { name, value });
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        self.record(GlCall::DrawArrays {
            topology,
            first,
            count,
        });
    }
}

fn link_shaders(
    shaders: &HashMap<u32, ShaderObject>,
    attached: &[u32],
) -> Result<LinkedInterface, String> {
    let mut vertex: Option<&ShaderInterface> = None;
    let mut fragment: Option<&ShaderInterface> = None;
    for id in attached {
        let so = shaders
            .get(id)
            .ok_or_else(|| format!("ERROR: shader #{} has been deleted", id))?;
        let iface = match &so.compiled {
            Some(Ok(iface)) => iface,
            _ => return Err(format!("ERROR: {} shader #{} is not compiled", so.stage, id)),
        };
        match so.stage {
            ShaderStage::Vertex => vertex = Some(iface),
            ShaderStage::Fragment => fragment = Some(iface),
        }
    }
    let vertex = vertex.ok_or("ERROR: missing vertex shader")?;
    let fragment = fragment.ok_or("ERROR: missing fragment shader")?;

    if let Some(v) = fragment.varyings.iter().find(|v| !vertex.varyings.contains(v)) {
        return Err(format!(
            "ERROR: varying '{}' used in fragment shader is not declared in vertex shader",
            v
        ));
    }

    let mut uniforms = vertex.uniforms.clone();
    for u in &fragment.uniforms {
        if !uniforms.contains(u) {
            uniforms.push(u.clone());
        }
    }
    Ok(LinkedInterface {
        attributes: vertex.attributes.clone(),
        uniforms,
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Ident(String),
    Punct(char),
}

fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'/') {
            for n in chars.by_ref() {
                if n == '\n' {
                    out.push('\n');
                    break;
                }
            }
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            let mut prev = ' ';
            for n in chars.by_ref() {
                if n == '\n' {
                    out.push('\n');
                }
                if prev == '*' && n == '/' {
                    break;
                }
                prev = n;
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// tokens with the 1-based line each one starts on
fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = vec![];
    let mut line = 1;
    let mut chars = source.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == '\n' {
            line += 1;
            chars.next();
        } else if c.is_whitespace() {
            chars.next();
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            let mut word = String::new();
            while let Some(&n) = chars.peek() {
                if n.is_ascii_alphanumeric() || n == '_' || n == '.' {
                    word.push(n);
                    chars.next();
                } else {
                    break;
                }
            }
            tokens.push((Token::Ident(word), line));
        } else {
            tokens.push((Token::Punct(c), line));
            chars.next();
        }
    }
    tokens
}

fn check_brackets(tokens: &[(Token, usize)]) -> Result<(), String> {
    let mut stack: Vec<(char, usize)> = vec![];
    for (tok, line) in tokens {
        if let Token::Punct(c) = tok {
            match c {
                '{' | '(' | '[' => stack.push((*c, *line)),
                '}' | ')' | ']' => {
                    let open = match c {
                        '}' => '{',
                        ')' => '(',
                        _ => '[',
                    };
                    match stack.pop() {
                        Some((o, _)) if o == open => {}
                        _ => return Err(format!("ERROR: 0:{}: syntax error, unexpected '{}'", line, c)),
                    }
                }
                _ => {}
            }
        }
    }
    match stack.pop() {
        Some((c, line)) => Err(format!("ERROR: 0:{}: syntax error, unbalanced '{}'", line, c)),
        None => Ok(()),
    }
}

fn has_main(tokens: &[(Token, usize)]) -> bool {
    tokens.windows(3).any(|w| {
        w[0].0 == Token::Ident("void".to_string())
            && w[1].0 == Token::Ident("main".to_string())
            && w[2].0 == Token::Punct('(')
    })
}

/// Splits tokens into top-level statements, skipping function bodies
fn top_level_statements(tokens: &[(Token, usize)]) -> Vec<Vec<(String, usize)>> {
    let mut statements = vec![];
    let mut current: Vec<(String, usize)> = vec![];
    let mut brace_depth = 0usize;
    for (tok, line) in tokens {
        match tok {
            Token::Punct('{') => brace_depth += 1,
            Token::Punct('}') => {
                brace_depth = brace_depth.saturating_sub(1);
                if brace_depth == 0 {
                    statements.push(std::mem::take(&mut current));
                }
            }
            _ if brace_depth > 0 => {}
            Token::Punct(';') => statements.push(std::mem::take(&mut current)),
            Token::Punct(c) => current.push((c.to_string(), *line)),
            Token::Ident(w) => current.push((w.clone(), *line)),
        }
    }
    if !current.is_empty() {
        statements.push(current);
    }
    statements
}

const PRECISIONS: [&str; 3] = ["lowp", "mediump", "highp"];

/// Minimal GLSL ES front-end: syntax sanity plus interface collection
pub fn scan_glsl(stage: ShaderStage, source: &str) -> Result<ShaderInterface, String> {
    // preprocessor lines (#version, #define ...) are blanked, line numbers kept
    let body = strip_comments(source)
        .lines()
        .map(|l| if l.trim_start().starts_with('#') { "" } else { l })
        .collect::<Vec<_>>()
        .join("\n");
    let tokens = tokenize(&body);
    check_brackets(&tokens)?;
    if !has_main(&tokens) {
        return Err("ERROR: 0:0: 'main' : function not defined".to_string());
    }

    let mut iface = ShaderInterface::default();
    for stmt in top_level_statements(&tokens) {
        let mut words = stmt.iter().map(|(w, _)| w.as_str()).peekable();
        // layout(location = N) prefix
        if words.peek() == Some(&"layout") {
            for w in words.by_ref() {
                if w == ")" {
                    break;
                }
            }
        }
        let Some(qualifier) = words.next() else {
            continue;
        };
        let line = stmt.first().map(|(_, l)| *l).unwrap_or(0);
        let rest: Vec<&str> = words.filter(|w| !PRECISIONS.contains(w)).collect();
        // qualifier type name [ '[' N ']' ]
        let Some(name) = rest.get(1).map(|n| n.to_string()) else {
            continue;
        };
        match (qualifier, stage) {
            ("attribute", ShaderStage::Fragment) => {
                return Err(format!(
                    "ERROR: 0:{}: 'attribute' : supported in vertex shaders only",
                    line
                ));
            }
            ("attribute", ShaderStage::Vertex) | ("in", ShaderStage::Vertex) => {
                iface.attributes.push(name)
            }
            ("uniform", _) => iface.uniforms.push(name),
            ("varying", _) | ("out", ShaderStage::Vertex) | ("in", ShaderStage::Fragment) => {
                iface.varyings.push(name)
            }
            _ => {}
        }
    }
    Ok(iface)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VS: &str = r#"
        // position
        attribute vec4 a_Position;
        attribute float a_PointSize;
        uniform vec4 u_Translation;
        varying vec4 v_Color;
        void main() {
            gl_Position = a_Position + u_Translation;
            gl_PointSize = a_PointSize;
            v_Color = vec4(1.0);
        }
    "#;

    const FS: &str = r#"
        precision mediump float;
        uniform vec4 u_FragColor;
        varying vec4 v_Color;
        void main() {
            gl_FragColor = u_FragColor * v_Color;
        }
    "#;

    #[test]
    fn scanner_collects_interface() {
        let vs = scan_glsl(ShaderStage::Vertex, VS).unwrap();
        assert_eq!(vs.attributes, vec!["a_Position", "a_PointSize"]);
        assert_eq!(vs.uniforms, vec!["u_Translation"]);
        assert_eq!(vs.varyings, vec!["v_Color"]);

        let fs = scan_glsl(ShaderStage::Fragment, FS).unwrap();
        assert!(fs.attributes.is_empty());
        assert_eq!(fs.uniforms, vec!["u_FragColor"]);
    }

    #[test]
    fn scanner_understands_es3_layout_syntax() {
        let src = r#"
            layout(location = 0) in vec2 aPos;
            layout(location = 1) in vec2 aTexCoord;
            out vec2 TexCoord;
            void main() { gl_Position = vec4(aPos, 0.0, 1.0); TexCoord = aTexCoord; }
        "#;
        let vs = scan_glsl(ShaderStage::Vertex, src).unwrap();
        assert_eq!(vs.attributes, vec!["aPos", "aTexCoord"]);
        assert_eq!(vs.varyings, vec!["TexCoord"]);
    }

    #[test]
    fn scanner_rejects_broken_sources() {
        let err = scan_glsl(ShaderStage::Fragment, "void main() { gl_FragColor = vec4(1.0; }")
            .unwrap_err();
        assert!(err.contains("unexpected"), "{}", err);

        let err = scan_glsl(ShaderStage::Vertex, "attribute vec4 p;").unwrap_err();
        assert!(err.contains("'main'"));

        let err = scan_glsl(ShaderStage::Fragment, "attribute vec4 p; void main() {}").unwrap_err();
        assert!(err.contains("vertex shaders only"));

        assert!(scan_glsl(ShaderStage::Vertex, "void main() {").is_err());
    }

    #[test]
    fn declarations_after_main_are_seen() {
        let src = "void main() { gl_Position = p; } attribute vec4 p;";
        let vs = scan_glsl(ShaderStage::Vertex, src).unwrap();
        assert_eq!(vs.attributes, vec!["p"]);
    }

    #[test]
    fn locations_follow_declaration_order() {
        let dev = HeadlessDevice::new();
        let vs = dev.create_shader(ShaderStage::Vertex).unwrap();
        dev.shader_source(vs, VS);
        dev.compile_shader(vs);
        let fs = dev.create_shader(ShaderStage::Fragment).unwrap();
        dev.shader_source(fs, FS);
        dev.compile_shader(fs);
        let p = dev.create_program().unwrap();
        dev.attach_shader(p, vs);
        dev.attach_shader(p, fs);
        dev.link_program(p);
        assert!(dev.program_link_status(p));
        assert_eq!(dev.attrib_location(p, "a_Position"), 0);
        assert_eq!(dev.attrib_location(p, "a_PointSize"), 1);
        assert_eq!(dev.attrib_location(p, "a_Missing"), -1);
        assert!(dev.uniform_location(p, "u_FragColor").is_some());
        assert!(dev.uniform_location(p, "u_Missing").is_none());
    }

    #[test]
    fn link_fails_on_undeclared_varying() {
        let dev = HeadlessDevice::new();
        let vs = dev.create_shader(ShaderStage::Vertex).unwrap();
        dev.shader_source(vs, "void main() { gl_Position = vec4(0.0); }");
        dev.compile_shader(vs);
        let fs = dev.create_shader(ShaderStage::Fragment).unwrap();
        dev.shader_source(fs, FS);
        dev.compile_shader(fs);
        let p = dev.create_program().unwrap();
        dev.attach_shader(p, vs);
        dev.attach_shader(p, fs);
        dev.link_program(p);
        assert!(!dev.program_link_status(p));
        assert!(dev.program_info_log(p).contains("v_Color"));
        assert_eq!(dev.attrib_location(p, "a_Position"), -1);
    }

    #[test]
    fn clones_share_the_call_log() {
        let a = HeadlessDevice::new();
        let b = a.clone();
        b.clear();
        assert_eq!(a.calls(), vec![GlCall::Clear]);
        assert!(a.same_device(&b));
        assert!(!a.same_device(&HeadlessDevice::new()));
    }

    #[test]
    fn calls_render_like_webgl() {
        let call = GlCall::DrawArrays {
            topology: Topology::TriangleFan,
            first: 0,
            count: 3,
        };
        assert_eq!(call.to_string(), "drawArrays(TRIANGLE_FAN, 0, 3)");
        let call = GlCall::VertexAttrib {
            location: 1,
            value: AttribConstant::F1(5.0),
        };
        assert_eq!(call.to_string(), "vertexAttrib1f(1, 5)");
    }
}
