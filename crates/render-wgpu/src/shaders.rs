/// WGSL shader for the screen-space line list.
///
/// Positions arrive in pixel coordinates with the origin at the top-left;
/// the vertex stage flips y and rescales into NDC from the viewport uniform.
pub const LINE_SHADER: &str = r#"
struct Uniforms {
    viewport: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct LineVertex {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
};

struct LineOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_line(vertex: LineVertex) -> LineOutput {
    let ndc = vec2<f32>(
        vertex.position.x / uniforms.viewport.x * 2.0 - 1.0,
        1.0 - vertex.position.y / uniforms.viewport.y * 2.0,
    );

    var out: LineOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = vertex.color;
    return out;
}

@fragment
fn fs_line(in: LineOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
