mod argument;
pub use self::argument::{ArgumentDescriptor, ArgumentMetadata};
mod method;
pub use self::method::{MethodDescriptor, MethodDescriptorBuilder, MethodMetadata};
