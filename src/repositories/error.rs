use crate::{
    error::{storage_status, DatabaseError},
    storage::StorageError,
};
use axum::http::StatusCode;
use sea_orm::DbErr;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Delete,
    Get,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Get => "get",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What made a repository operation fail.
#[derive(Debug, Error)]
pub enum Cause {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl Cause {
    pub fn status(&self) -> StatusCode {
        match self {
            Cause::NotFound { .. } => StatusCode::NOT_FOUND,
            Cause::Database(error) if error.foreign_key_violation() => StatusCode::BAD_REQUEST,
            Cause::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Cause::Storage(error) => storage_status(error),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Cause::NotFound { .. })
    }
}

/// The errors of one entity, one variant per registered action plus a base variant.
pub trait ErrorFamily: std::error::Error + Send + Sync + Sized + 'static {
    const ENTITY: &'static str;

    /// Constructor registered for `action`, if any.
    fn registered(action: Action) -> Option<fn(Cause) -> Self>;

    fn base(action: Action, cause: Cause) -> Self;

    fn action(&self) -> Action;

    fn reason(&self) -> &Cause;

    fn raise(action: Action, cause: Cause) -> Self {
        let error = match Self::registered(action) {
            Some(constructor) => constructor(cause),
            None => Self::base(action, cause),
        };

        if error.reason().is_not_found() {
            debug!("{}", error);
        } else {
            error!("{}", error);
        }

        error
    }
}

macro_rules! error_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($entity:literal, base = $base_code:literal) {
            $($action:ident = $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name {
            $($action($crate::repositories::Cause),)+
            Base($crate::repositories::Action, $crate::repositories::Cause),
        }

        impl $name {
            pub const fn code(&self) -> u32 {
                match self {
                    $(Self::$action(_) => $code,)+
                    Self::Base(..) => $base_code,
                }
            }
        }

        impl $crate::repositories::ErrorFamily for $name {
            const ENTITY: &'static str = $entity;

            #[allow(unreachable_patterns)]
            fn registered(
                action: $crate::repositories::Action,
            ) -> Option<fn($crate::repositories::Cause) -> Self> {
                match action {
                    $($crate::repositories::Action::$action => Some(Self::$action),)+
                    _ => None,
                }
            }

            fn base(action: $crate::repositories::Action, cause: $crate::repositories::Cause) -> Self {
                Self::Base(action, cause)
            }

            fn action(&self) -> $crate::repositories::Action {
                match self {
                    $(Self::$action(_) => $crate::repositories::Action::$action,)+
                    Self::Base(action, _) => *action,
                }
            }

            fn reason(&self) -> &$crate::repositories::Cause {
                match self {
                    $(Self::$action(cause) => cause,)+
                    Self::Base(_, cause) => cause,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                use $crate::repositories::ErrorFamily;

                write!(f, "Failed to {} {}: {}", self.action(), Self::ENTITY, self.reason())
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                use $crate::repositories::ErrorFamily;

                Some(self.reason())
            }
        }

        impl From<$name> for $crate::error::Error {
            fn from(error: $name) -> Self {
                use $crate::repositories::ErrorFamily;

                $crate::error::Error::with_message(
                    error.reason().status(),
                    error.code(),
                    error.to_string(),
                )
            }
        }
    };
}

error_family! {
    /// Errors of the test repository.
    pub enum TestError("test", base = 24) {
        Create = 20,
        Update = 21,
        Delete = 22,
        Get = 23,
    }
}

error_family! {
    /// Errors of the question repository. Reads are not registered and fall back to `Base`.
    pub enum QuestionError("question", base = 34) {
        Create = 30,
        Update = 31,
        Delete = 32,
    }
}
