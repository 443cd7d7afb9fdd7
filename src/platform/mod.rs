use libc::{
    PTHREAD_PROCESS_SHARED, SEM_FAILED, pthread_mutexattr_t, pthread_rwlock_t,
    pthread_rwlockattr_t, sem_t,
};

use crate::Size;
use crate::report::{Report, SpecialValue, TypeSize, Value};

/// Reads the primitive layout facts from the platform C definitions.
///
/// Everything here is fixed at build time by the target's libc; a target
/// that does not define one of these names does not build at all.
#[must_use]
pub fn probe() -> Report {
    Report::new(
        [
            TypeSize {
                name: "sem_t",
                size: Size::of::<sem_t>(),
            },
            TypeSize {
                name: "pthread_mutexattr_t",
                size: Size::of::<pthread_mutexattr_t>(),
            },
            TypeSize {
                name: "pthread_rwlockattr_t",
                size: Size::of::<pthread_rwlockattr_t>(),
            },
            TypeSize {
                name: "pthread_rwlock_t",
                size: Size::of::<pthread_rwlock_t>(),
            },
        ],
        [
            SpecialValue {
                name: "SEM_FAILED",
                value: Value::Address(SEM_FAILED.addr()),
            },
            SpecialValue {
                name: "PTHREAD_PROCESS_SHARED",
                value: Value::Flag(PTHREAD_PROCESS_SHARED),
            },
        ],
    )
}
