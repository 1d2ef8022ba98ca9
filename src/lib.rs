//! # SMS Notification Listener Bridge
//!
//! Native library behind `com.undiyal.sms.SmsNotificationListener`. It exposes
//! the listener operations twice: as JNI methods for the Kotlin side and as
//! plain C symbols for Dart FFI. The JNI methods trace the call and forward to
//! the C symbols.

use robusta_jni::bridge;

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ffi;
pub mod listener;

#[allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#[allow(non_snake_case)]
#[bridge]
mod jni {
    use robusta_jni::convert::{Signature, IntoJavaValue, FromJavaValue, TryIntoJavaValue, TryFromJavaValue};
    use robusta_jni::jni::JNIEnv;
    use robusta_jni::jni::objects::AutoLocal;

    #[derive(Signature, TryIntoJavaValue, IntoJavaValue, TryFromJavaValue, FromJavaValue)]
    #[package(com.undiyal.sms)]
    pub struct SmsNotificationListener<'env: 'borrow, 'borrow> {
        #[instance]
        raw: AutoLocal<'env, 'borrow>,
    }

    impl<'env: 'borrow, 'borrow> SmsNotificationListener<'env, 'borrow> {
        pub extern "jni" fn nativeSmsListenerStart(self, _env: &JNIEnv) {
            crate::ffi::jni_start_listener();
        }

        pub extern "jni" fn nativeSmsListenerStop(self, _env: &JNIEnv) {
            crate::ffi::jni_stop_listener();
        }

        pub extern "jni" fn nativeOpenNotificationSettings(self, _env: &JNIEnv) {
            crate::ffi::jni_open_notification_settings();
        }
    }
}
