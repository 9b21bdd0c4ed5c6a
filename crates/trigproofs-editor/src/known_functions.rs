//! Preset radial functions offered by the properties UI.

/// A named expression preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownFunction {
    pub name: &'static str,
    pub expression: &'static str,
}

/// Built-in radial function choices, in menu order.
pub const KNOWN_RADIAL_FUNCTIONS: &[KnownFunction] = &[
    KnownFunction { name: "Constant: 1", expression: "1" },
    KnownFunction { name: "Linear: x", expression: "x" },
    KnownFunction { name: "Sine: sin(x)", expression: "sin(x)" },
    KnownFunction { name: "Cosine: cos(x)", expression: "cos(x)" },
    KnownFunction { name: "Secant: sec(x)", expression: "sec(x)" },
    KnownFunction { name: "Tangent: tan(x)", expression: "tan(x)" },
    KnownFunction { name: "Cosecant: csc(x)", expression: "csc(x)" },
    KnownFunction { name: "Cotangent: cot(x)", expression: "cot(x)" },
    KnownFunction { name: "Square: x^2", expression: "x^2" },
    KnownFunction { name: "Cube: x^3", expression: "x^3" },
    KnownFunction { name: "Square Root: sqrt(x)", expression: "sqrt(x)" },
    KnownFunction { name: "Exponential: exp(x)", expression: "exp(x)" },
    KnownFunction { name: "Logarithm: log(x)", expression: "log(x)" },
    KnownFunction { name: "Reciprocal: 1/x", expression: "1/x" },
];
