//! File prelude and the marker attribute declarations.

use serde::Serialize;
use sumgen_core::SchemaModel;

use crate::error::Result;
use crate::generators::{CodeWriter, TemplateEngine};

const PRELUDE: &str = "csharp_prelude";
const GENERATED_CODE: &str = "csharp_generated_code";
const SUPPORT: &str = "csharp_support";

const PRELUDE_TEMPLATE: &str = "// <auto-generated/>
// Source schema: {{declared}}
#nullable enable

using System;
using System.Diagnostics.CodeAnalysis;";

const GENERATED_CODE_TEMPLATE: &str =
    "[global::System.CodeDom.Compiler.GeneratedCode({{cs_string tool}}, {{cs_string version}})]";

const SUPPORT_TEMPLATE: &str = "// <auto-generated/>
#nullable enable

using System;

namespace {{namespace}};

{{generated_code}}
[AttributeUsage(AttributeTargets.Field, AllowMultiple = false)]
internal sealed class VariantValueTypeAttribute : Attribute
{
    public VariantValueTypeAttribute(params Type[] types)
    {
        Types = types;
    }

    public Type[] Types { get; }
}

{{generated_code}}
[AttributeUsage(AttributeTargets.Enum, AllowMultiple = false)]
internal sealed class IgnoreVariantAttribute : Attribute
{
}
";

#[derive(Serialize)]
struct PreludeData<'a> {
    declared: &'a str,
}

#[derive(Serialize)]
struct GeneratedCodeData {
    tool: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct SupportData<'a> {
    namespace: &'a str,
    generated_code: &'a str,
}

pub(super) fn register(engine: &mut TemplateEngine<'_>) -> Result<()> {
    engine.register_template(PRELUDE, PRELUDE_TEMPLATE)?;
    engine.register_template(GENERATED_CODE, GENERATED_CODE_TEMPLATE)?;
    engine.register_template(SUPPORT, SUPPORT_TEMPLATE)?;
    Ok(())
}

/// `[GeneratedCode("sumgen", "<version>")]`, applied to every emitted type.
pub(super) fn generated_code_attribute(engine: &TemplateEngine<'_>) -> Result<String> {
    engine.render(
        GENERATED_CODE,
        &GeneratedCodeData {
            tool: "sumgen",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

pub(super) fn emit_prelude(
    engine: &TemplateEngine<'_>,
    schema: &SchemaModel,
    w: &mut CodeWriter,
) -> Result<()> {
    let text = engine.render(
        PRELUDE,
        &PreludeData {
            declared: &schema.declared_identifier,
        },
    )?;
    w.block(&text);
    Ok(())
}

/// Declarations of the attributes a host uses to write schemas.
pub(super) fn render_support(
    engine: &TemplateEngine<'_>,
    namespace: &str,
    generated_code: &str,
) -> Result<String> {
    engine.render(
        SUPPORT,
        &SupportData {
            namespace,
            generated_code,
        },
    )
}
