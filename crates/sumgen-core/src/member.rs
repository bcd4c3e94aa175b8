//! Conversion of raw member declarations into [`MemberModel`]s.

use smallvec::SmallVec;

use crate::errors::ModelError;
use crate::literal::NumericLiteral;
use crate::schema::{MemberModel, RawMember};
use crate::types::TypeSlot;

/// Resolves a raw member's type annotation and literal into a [`MemberModel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberModelBuilder;

impl MemberModelBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build one member.
    ///
    /// A member without an annotation, or with an empty one, becomes a unit
    /// variant. Slots keep their declared order, which fixes the positional
    /// names `args0, args1, …`.
    pub fn build(&self, raw: &RawMember) -> Result<MemberModel, ModelError> {
        let mut value_types = SmallVec::new();

        for (position, slot) in raw.value_types.iter().flatten().enumerate() {
            match slot {
                TypeSlot::Resolved(ty) => value_types.push(ty.clone()),
                TypeSlot::Unresolved { unresolved } => {
                    return Err(ModelError::UnresolvedType {
                        member: raw.name.clone(),
                        position,
                        text: unresolved.clone(),
                    })
                }
            }
        }

        Ok(MemberModel {
            name: raw.name.clone(),
            value_types,
            literal: raw.literal.as_deref().map(NumericLiteral::new),
        })
    }

    /// Build every member, stopping at the first failure.
    pub fn build_all<'a>(
        &self,
        raws: impl IntoIterator<Item = &'a RawMember>,
    ) -> Result<Vec<MemberModel>, ModelError> {
        raws.into_iter().map(|raw| self.build(raw)).collect()
    }
}
