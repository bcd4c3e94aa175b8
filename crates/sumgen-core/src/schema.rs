//! Schema types: raw candidates from the host and the validated model.

use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::errors::ModelError;
use crate::literal::NumericLiteral;
use crate::types::{Accessibility, Location, Nesting, TypeRef, TypeSlot, UnderlyingType};

/// A schema declaration as discovered by the host, before validation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SchemaCandidate {
    /// Declared identifier, e.g. `IpAddrVariant`.
    pub identifier: String,
    pub nesting: Nesting,
    /// Declaration carries the ignore marker.
    pub ignore: bool,
    pub namespace: Option<String>,
    pub underlying_type: Option<UnderlyingType>,
    pub accessibility: Accessibility,
    pub location: Location,
    pub members: Vec<RawMember>,
}

impl SchemaCandidate {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn nested_in(mut self, parent: impl Into<String>) -> Self {
        self.nesting = Nesting::Nested {
            parent: parent.into(),
        };
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn underlying(mut self, underlying: UnderlyingType) -> Self {
        self.underlying_type = Some(underlying);
        self
    }

    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn member(mut self, member: RawMember) -> Self {
        self.members.push(member);
        self
    }
}

/// A member declaration as discovered by the host.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawMember {
    pub name: String,
    /// `None` when the member carries no associated-value annotation.
    pub value_types: Option<Vec<TypeSlot>>,
    /// Explicit discriminant literal text.
    pub literal: Option<String>,
}

impl RawMember {
    /// A member without an associated-value annotation.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A member annotated with the given type slots.
    pub fn with_types<I, T>(name: impl Into<String>, slots: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeSlot>,
    {
        Self {
            name: name.into(),
            value_types: Some(slots.into_iter().map(Into::into).collect()),
            literal: None,
        }
    }

    pub fn literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }
}

/// One variant of a validated schema.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberModel {
    pub name: String,
    /// Ordered associated value types; empty for a unit variant.
    pub value_types: SmallVec<[TypeRef; 4]>,
    pub literal: Option<NumericLiteral>,
}

impl MemberModel {
    /// A unit variant.
    pub fn unit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_types: SmallVec::new(),
            literal: None,
        }
    }

    /// A variant with associated values of the given types.
    pub fn with_types<I, T>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeRef>,
    {
        Self {
            name: name.into(),
            value_types: types.into_iter().map(Into::into).collect(),
            literal: None,
        }
    }

    pub fn literal(mut self, literal: impl Into<NumericLiteral>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn is_unit(&self) -> bool {
        self.value_types.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.value_types.len()
    }

    /// Positional argument names paired with their types: `args0`, `args1`, …
    pub fn args(&self) -> impl Iterator<Item = (String, &TypeRef)> + '_ {
        self.value_types
            .iter()
            .enumerate()
            .map(|(i, ty)| (arg_name(i), ty))
    }
}

/// Name of the positional argument at `index`.
pub fn arg_name(index: usize) -> String {
    format!("args{}", index)
}

/// A validated tagged-union definition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchemaModel {
    /// Union name with the marker suffix stripped.
    pub name: String,
    /// Identifier as declared; also names the companion enum.
    pub declared_identifier: String,
    pub namespace: Option<String>,
    pub underlying: UnderlyingType,
    pub accessibility: Accessibility,
    pub location: Location,
    members: Vec<MemberModel>,
}

impl SchemaModel {
    /// Start building a schema named `name`.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    pub fn members(&self) -> &[MemberModel] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&MemberModel> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.name.as_str())
    }

    /// Numeric value of every member, in declaration order.
    ///
    /// An explicit literal sets the member's value and the baseline for the
    /// members after it; an implicit member takes the previous value plus one,
    /// starting from zero.
    pub fn discriminants(&self) -> Result<Vec<i128>, ModelError> {
        self.known_discriminants()?
            .into_iter()
            .zip(&self.members)
            .map(|(value, member)| {
                value.ok_or_else(|| ModelError::InvalidLiteral {
                    member: member.name.clone(),
                    literal: member
                        .literal
                        .as_ref()
                        .map(|l| l.as_str().to_string())
                        .unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Range-check every discriminant that can be evaluated.
    ///
    /// A literal that is a constant expression has no known value; it and the
    /// implicit members after it are skipped until the next literal that does.
    pub fn check_discriminants(&self) -> Result<(), ModelError> {
        self.known_discriminants().map(drop)
    }

    fn known_discriminants(&self) -> Result<Vec<Option<i128>>, ModelError> {
        let mut values = Vec::with_capacity(self.members.len());
        let mut next = Some(0i128);

        for member in &self.members {
            let value = match &member.literal {
                Some(literal) => literal.evaluate(),
                None => next,
            };

            if let Some(value) = value {
                if !self.underlying.contains(value) {
                    return Err(ModelError::DiscriminantOutOfRange {
                        member: member.name.clone(),
                        value,
                        underlying: self.underlying,
                    });
                }
            }

            values.push(value);
            next = value.map(|v| v + 1);
        }

        Ok(values)
    }
}

/// Builder for [`SchemaModel`]s constructed directly rather than from a
/// host candidate.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    declared_identifier: Option<String>,
    namespace: Option<String>,
    underlying: UnderlyingType,
    accessibility: Accessibility,
    location: Location,
    members: Vec<MemberModel>,
}

impl SchemaBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_identifier: None,
            namespace: None,
            underlying: UnderlyingType::default(),
            accessibility: Accessibility::default(),
            location: Location::default(),
            members: Vec::new(),
        }
    }

    /// Set the declared identifier. Defaults to the name plus `Variant`.
    pub fn declared_as(mut self, identifier: impl Into<String>) -> Self {
        self.declared_identifier = Some(identifier.into());
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn underlying(mut self, underlying: UnderlyingType) -> Self {
        self.underlying = underlying;
        self
    }

    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn member(mut self, member: MemberModel) -> Self {
        self.members.push(member);
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = MemberModel>) -> Self {
        self.members.extend(members);
        self
    }

    /// Build the schema, checking that names are present and unique.
    pub fn build(self) -> Result<SchemaModel, ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::EmptyIdentifier);
        }

        let mut seen = IndexSet::with_capacity(self.members.len());
        for member in &self.members {
            if member.name.is_empty() {
                return Err(ModelError::EmptyMemberName {
                    schema: self.name.clone(),
                });
            }
            if !seen.insert(member.name.as_str()) {
                return Err(ModelError::DuplicateMember {
                    schema: self.name.clone(),
                    member: member.name.clone(),
                });
            }
        }

        let declared_identifier = self
            .declared_identifier
            .unwrap_or_else(|| format!("{}{}", self.name, crate::validate::DEFAULT_MARKER_SUFFIX));

        Ok(SchemaModel {
            name: self.name,
            declared_identifier,
            namespace: self.namespace,
            underlying: self.underlying,
            accessibility: self.accessibility,
            location: self.location,
            members: self.members,
        })
    }
}
