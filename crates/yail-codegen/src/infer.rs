//! Value-kind inference for blocks.

use crate::Pass;
use crate::pass::variable_key;
use rhizome_yail_ir::ValueKind;
use rhizome_yail_ir::builders::global_name;
use rhizome_yail_syntax_bky::Block;

/// Kinds fixed by the block type alone.
fn literal_kind(block_type: &str) -> Option<ValueKind> {
    let kind = match block_type {
        "math_number" | "math_number_radix" | "math_arithmetic" | "math_add"
        | "math_subtract" | "math_multiply" | "math_division" | "math_power" | "math_single"
        | "math_abs" | "math_neg" | "math_round" | "math_ceiling" | "math_floor" | "math_trig"
        | "math_cos" | "math_tan" | "math_atan2" | "math_random_int" | "math_random_float"
        | "math_constant" | "math_modulo" | "math_min_max" | "math_on_list" | "math_divide"
        | "math_convert_angles" | "math_bitwise" | "color_picker" | "color_make_color"
        | "text_length" | "text_starts_at" | "lists_length" | "lists_position"
        | "lists_position_in" | "dictionaries_length" => ValueKind::Number,

        "color_split_color" => ValueKind::List,
        named if named.starts_with("color_") => ValueKind::Number,

        "logic_boolean" | "logic_false" | "logic_compare" | "logic_operation"
        | "logic_negate" | "logic_or" | "logic_null" | "math_compare" | "math_is_a_number"
        | "text_compare" | "text_isEmpty" | "text_contains" | "text_is_string"
        | "lists_is_empty" | "lists_is_in" | "lists_contains" | "lists_is_list"
        | "dictionaries_is_key_in" | "dictionaries_is_dict" => ValueKind::Boolean,

        "text" | "text_join" | "text_append" | "text_changeCase" | "text_trim"
        | "text_charAt" | "text_getSubstring" | "text_substring" | "text_segment"
        | "text_replace" | "text_replace_all" | "text_reverse" | "text_replace_mappings"
        | "obfuscated_text" | "math_format_as_decimal" | "math_convert_number"
        | "lists_to_csv_row" | "lists_to_csv_table" | "lists_join_with_separator"
        | "helpers_screen_names" | "helpers_assets" => ValueKind::Text,

        "lists_create_with" | "lists_create_empty" | "lists_empty" | "text_split"
        | "text_split_at_spaces" | "lists_from_csv_row" | "lists_from_csv_table"
        | "lists_copy" | "lists_reverse" | "dictionaries_getters" | "dictionaries_get_values"
        | "dictionaries_dict_to_alist" => ValueKind::List,

        "dictionaries_create_with" | "dictionaries_alist_to_dict" | "dictionaries_copy" => {
            ValueKind::Dictionary
        }
        "pair" => ValueKind::Pair,
        "component_component_block" => ValueKind::Component,
        _ => return None,
    };
    Some(kind)
}

impl Pass<'_> {
    /// Infer the runtime kind of the value a block produces.
    ///
    /// Literal and operator blocks map through a fixed table; component
    /// blocks consult metadata; variable reads use kinds recorded earlier in
    /// the pass. An absent block reads as text.
    pub fn infer(&self, block: Option<&Block>) -> ValueKind {
        let Some(block) = block else {
            return ValueKind::Text;
        };
        if let Some(kind) = literal_kind(&block.block_type) {
            return kind;
        }

        match block.block_type.as_str() {
            "component_method" => {
                let instance = self.component_instance(block);
                let component_type = self.component_type(block, &instance);
                let method = method_name(block);
                component_type
                    .and_then(|ty| self.metadata().method(&ty, method))
                    .map(|signature| signature.return_kind)
                    .unwrap_or(ValueKind::Any)
            }
            "component_get_property" | "component_set_get" => {
                let instance = self.component_instance(block);
                let component_type = self.component_type(block, &instance);
                self.property_kind(component_type.as_deref(), property_name(block))
                    .unwrap_or(ValueKind::Any)
            }
            "lexical_variable_get" | "for_lexical_variable_get"
            | "procedure_lexical_variable_get" => variable_name(block)
                .map(|name| self.variable_kind(&variable_key(name)))
                .unwrap_or(ValueKind::Any),
            "variables_get" => variable_name(block)
                .map(|name| self.variable_kind(&global_name(name)))
                .unwrap_or(ValueKind::Any),
            "global_declaration" => match block.field("NAME") {
                Some(name) => match self.variable_kind(&global_name(name)) {
                    ValueKind::Any => self.infer(block.value("VALUE")),
                    kind => kind,
                },
                None => ValueKind::Any,
            },
            "controls_choose" => self.infer(block.value("THENRETURN")),
            "logic_ternary" => self.infer(block.value("THEN")),
            "procedures_callnoreturn" => ValueKind::Text,
            "procedures_callreturn" => ValueKind::Any,
            _ => match block.field("VALUE") {
                Some(value) if value.starts_with("&H") => ValueKind::Number,
                Some(_) => ValueKind::Text,
                None => ValueKind::Any,
            },
        }
    }
}

pub(crate) fn variable_name(block: &Block) -> Option<&str> {
    block
        .field("VAR")
        .or_else(|| block.field("VARIABLE"))
        .or_else(|| block.mutation_attr("variable_name"))
}

pub(crate) fn method_name(block: &Block) -> &str {
    block
        .mutation_attr("method_name")
        .or_else(|| block.field("METHOD_NAME"))
        .unwrap_or("unknown")
}

pub(crate) fn property_name(block: &Block) -> &str {
    block
        .mutation_attr("property_name")
        .or_else(|| block.field("PROPERTY_NAME"))
        .unwrap_or("unknown")
}
