use alp_schema::SchemaRegistry;
use anyhow::bail;

use crate::cli::OutputFormat;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `alp schema`.
pub fn handle(args: &SchemaArgs, format: OutputFormat) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    if args.list {
        return output(&registry.list(), format);
    }

    let Some(name) = args.type_name.as_deref() else {
        bail!("a schema name is required (see `alp schema --list`)");
    };

    match registry.get(name) {
        Some(schema) => output(schema, format),
        None => bail!("unknown schema '{name}' (see `alp schema --list`)"),
    }
}
